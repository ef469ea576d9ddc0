pub mod cli;
pub mod cmd;
pub mod io;
pub mod logging;
