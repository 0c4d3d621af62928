mod linkedin;

pub use linkedin::LinkedInProvider;
