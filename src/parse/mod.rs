pub mod command_parser;
pub mod task_parser;
pub mod task_serializer;

pub use command_parser::parse_input;
pub use task_parser::decode_task;
pub use task_serializer::encode_task;
