pub mod html;
pub mod node;
pub mod props;
pub mod traverse;
