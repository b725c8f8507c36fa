/// External inference provider clients
pub mod stable_diffusion;

pub use stable_diffusion::StableDiffusionClient;
