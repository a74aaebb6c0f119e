pub mod time_prompt;
