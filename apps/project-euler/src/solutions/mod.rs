pub mod pe1;
pub mod pe2;
pub mod pe3;
