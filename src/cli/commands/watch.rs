use crate::cli::commands::session;
use crate::cli::parser::{Commands, WatchAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_elapsed;
use std::thread;
use std::time::{Duration, Instant};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Watch { action } = cmd else {
        return Ok(());
    };

    let mut app = session::open(cfg);

    match action {
        WatchAction::Show => app.refresh_stopwatch(),

        WatchAction::Toggle => {
            let running = app.toggle_stopwatch();
            let elapsed = format_elapsed(app.current_elapsed());
            if running {
                success("Stopwatch started.");
                session::audit(&app, "watch", "start", &format!("Started at {}", elapsed));
            } else {
                success("Stopwatch stopped.");
                session::audit(&app, "watch", "stop", &format!("Stopped at {}", elapsed));
            }
        }

        WatchAction::Live { seconds } => {
            app.refresh_stopwatch();
            if !app.stopwatch().is_running() {
                info("The stopwatch is stopped; start it with `knitcount watch toggle`.");
                return Ok(());
            }

            // A deadline too far out to represent means no deadline at all.
            let deadline =
                seconds.and_then(|s| Instant::now().checked_add(Duration::from_secs(s)));
            app.view_mut().set_live(true);

            // Sleep until the next tick (or the deadline), then redraw.
            while let Some(wait) = app.ticker().time_until_due(Instant::now()) {
                let wait = match deadline {
                    Some(d) => {
                        let left = d.saturating_duration_since(Instant::now());
                        if left.is_zero() {
                            break;
                        }
                        wait.min(left)
                    }
                    None => wait,
                };
                thread::sleep(wait);
                app.tick(Instant::now());
            }

            app.view_mut().set_live(false);
        }
    }

    Ok(())
}
