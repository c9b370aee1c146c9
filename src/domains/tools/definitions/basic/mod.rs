//! Basic text tools.
//!
//! - `say_hello`: greeting with a default name
//! - `echo_message`: echo a message back with a fixed prefix
//! - `get_server_info`: static server metadata
//! - `count_words`: whitespace word and character statistics

pub mod count_words;
pub mod echo_message;
pub mod say_hello;
pub mod server_info;

pub use count_words::{CountWordsParams, CountWordsTool, WordCountResult};
pub use echo_message::{EchoMessageParams, EchoMessageTool};
pub use say_hello::{SayHelloParams, SayHelloTool};
pub use server_info::{GetServerInfoParams, GetServerInfoTool, ServerInfo};
