mod board;
mod config;
mod console;
mod json_contract;
mod passes;

pub use board::ChartBoard;
pub use config::ChartBoardConfig;
pub use console::{ConsoleController, ConsoleEvent, HttpMethod};
pub use json_contract::{ChartDocumentJsonContractV1, DOCUMENT_JSON_SCHEMA_V1};
pub use passes::{ContainerFailure, RenderReport};
