pub mod hello;
pub mod time;

pub use hello::SayHelloTool;
pub use time::SystemTimeTool;
