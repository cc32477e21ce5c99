pub mod dotenv;
pub mod process;
