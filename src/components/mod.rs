mod about;
mod footer;
mod hero;
mod icon;
mod marquee;
mod nav;
mod particles;
mod product_grid;

pub use about::AboutSection;
pub use footer::{copyright_line, Footer};
pub use hero::Hero;
pub use marquee::VelocityMarquee;
pub use nav::Nav;
pub use particles::ParticleField;
pub use product_grid::{ProductCard, ProductGrid};
