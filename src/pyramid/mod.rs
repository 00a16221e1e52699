pub mod surf;
