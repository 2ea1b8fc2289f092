pub mod banner;
pub mod cat;
pub mod cd;
pub mod clear;
pub mod echo;
pub mod email;
pub mod exit;
pub mod help;
pub mod history;
pub mod hostname;
pub mod ls;
pub mod pwd;
pub mod repo;
pub mod theme;
pub mod whoami;
