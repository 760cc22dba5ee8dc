mod lifecycle_tests;
mod persistence_tests;
mod watcher_tests;
