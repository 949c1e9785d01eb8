pub mod poll_watcher;
