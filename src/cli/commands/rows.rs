use crate::cli::commands::session::{self, CliApp, to_index};
use crate::cli::parser::{Commands, RowsAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Name of the row at a 0-based index, for messages.
fn row_name(app: &CliApp, index: usize) -> String {
    app.rows()
        .get(index.min(app.rows().len() - 1))
        .map(|r| r.name.clone())
        .unwrap_or_default()
}

/// Out-of-range positions are clamped; say so.
fn note_clamped(app: &CliApp, pos: usize) {
    let len = app.rows().len();
    if pos == 0 || pos > len {
        warning(format!(
            "Position {} is out of range (1..={}), using {}.",
            pos,
            len,
            pos.clamp(1, len)
        ));
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Rows { action } = cmd else {
        return Ok(());
    };

    let mut app = session::open(cfg);

    match action {
        RowsAction::List => app.render_rows(),

        RowsAction::Add { after } => {
            let after_index = match after {
                None => Some(app.rows().len() - 1),
                Some(0) => None,
                Some(p) => Some(p - 1),
            };
            let at = app.add_row(after_index);
            let name = row_name(&app, at);
            info(format!("Added '{}' at position {}.", name, at + 1));
            session::audit(&app, "rows", "add", &format!("Added '{}' at {}", name, at + 1));
        }

        RowsAction::Remove { pos } => {
            note_clamped(&app, *pos);
            let name = row_name(&app, to_index(*pos));
            if app.remove_row(to_index(*pos)) {
                info(format!("Removed '{}'.", name));
                session::audit(&app, "rows", "remove", &format!("Removed '{}'", name));
            } else {
                warning("The last remaining row cannot be removed.");
            }
        }

        RowsAction::Rename { pos, name } => {
            note_clamped(&app, *pos);
            let index = to_index(*pos);
            let old = row_name(&app, index);
            app.rename_row(index, name);
            let new = row_name(&app, index);
            session::audit(&app, "rows", "rename", &format!("'{}' → '{}'", old, new));
        }

        RowsAction::Inc { pos, by } => {
            note_clamped(&app, *pos);
            app.change_count(to_index(*pos), i64::from(*by));
            session::audit(&app, "rows", "inc", &format!("+{} on position {}", by, pos));
        }

        RowsAction::Dec { pos, by } => {
            note_clamped(&app, *pos);
            app.change_count(to_index(*pos), -i64::from(*by));
            session::audit(&app, "rows", "dec", &format!("-{} on position {}", by, pos));
        }

        RowsAction::Set { pos, value } => {
            note_clamped(&app, *pos);
            let index = to_index(*pos);
            app.set_count_input(index, value);
            let count = app.rows().get(index.min(app.rows().len() - 1)).map_or(0, |r| r.count);
            session::audit(&app, "rows", "set", &format!("Position {} set to {}", pos, count));
        }

        RowsAction::Move { from, to } => {
            note_clamped(&app, *from);
            note_clamped(&app, *to);
            if app.move_row(to_index(*from), to_index(*to)) {
                session::audit(&app, "rows", "move", &format!("{} → {}", from, to));
            } else {
                info("Nothing to move.");
            }
        }
    }

    Ok(())
}
