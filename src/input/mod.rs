pub mod dispatcher;

pub use dispatcher::handle_input;
