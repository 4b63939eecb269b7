mod common;
mod describe;
mod points;
