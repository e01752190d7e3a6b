use crate::error::Error;
use crate::parse::Parser;
use crate::roll::SharedRoller;
use crate::tree::{RollNode, Rollable};

/// Builds roll trees from notation.
///
/// Every die built by one factory draws from the same [SharedRoller].
#[derive(Debug, Clone)]
pub struct Factory {
    max_dice: Option<usize>,
    roller: SharedRoller,
}

impl Factory {
    pub const DEFAULT_MAX_DICE: usize = 1000;

    pub fn new(max_dice: Option<usize>, roller: SharedRoller) -> Self {
        Self { max_dice, roller }
    }

    pub fn new_bounded(max_dice: usize, roller: SharedRoller) -> Self {
        Self::new(Some(max_dice), roller)
    }

    pub fn new_unbounded(roller: SharedRoller) -> Self {
        Self::new(None, roller)
    }

    pub fn max_dice(&self) -> Option<usize> {
        self.max_dice
    }

    pub fn roller(&self) -> &SharedRoller {
        &self.roller
    }

    /// Parses `notation` into a tree.
    ///
    /// Fails when the text is not dice notation, when a die or modifier cannot be
    /// built, or when more dice are requested than the limit allows.
    pub fn new_instance(&self, notation: &str) -> Result<RollNode, Error> {
        let node = Parser::new(notation, self.roller.clone(), self.max_dice).parse()?;
        #[cfg(feature = "logging")]
        log::debug!("parsed {:?} as {}", notation, node.notation());
        Ok(node)
    }

    pub fn notation(&self, node: &RollNode) -> String {
        node.notation()
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new_bounded(Self::DEFAULT_MAX_DICE, SharedRoller::default())
    }
}
