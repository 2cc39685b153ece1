pub mod commands;
pub mod handlers;

pub use handlers::{
    GenerateArgs, expand_output_path, handle_generate, parse_generate_args, usage_text,
};
