pub mod db;
pub mod lock;
