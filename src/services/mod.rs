pub mod completion;
pub mod exchange_log;
pub mod processor;
