// Clan-war sheet reporter: polls the CoC current-war endpoint and mirrors
// the snapshot into fixed ranges of a Google Sheets worksheet.

pub mod api;
pub mod coc;
pub mod config;
pub mod cycle;
pub mod error;
pub mod rows;
pub mod scheduler;
pub mod sheets;
pub mod timefmt;
