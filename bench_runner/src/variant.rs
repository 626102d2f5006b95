//!
//! The benchmark variant.
//!

#[cfg(test)]
mod tests;

use std::str::FromStr;

///
/// The benchmark variant, that is, the rendering backend of the executable.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// The Vulkan renderer.
    Vulkan,
    /// The OpenGL renderer.
    Gl,
}

impl Variant {
    /// All variants in the order they are run.
    pub const ALL: [Self; 2] = [Self::Vulkan, Self::Gl];

    ///
    /// Returns the variant name, which is also its results subdirectory name.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vulkan => "vulkan",
            Self::Gl => "gl",
        }
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "vulkan" => Ok(Self::Vulkan),
            "gl" => Ok(Self::Gl),
            _ => Err(anyhow::anyhow!(
                "Unknown variant `{}`. Supported variants: {}",
                string,
                Self::ALL
                    .into_iter()
                    .map(|variant| variant.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
