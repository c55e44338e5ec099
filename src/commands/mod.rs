pub mod create;
pub mod ignore;
pub mod list;
