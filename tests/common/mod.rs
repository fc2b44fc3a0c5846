pub mod synthetic_quad;
