pub mod scope_timer;
