//! Connectors between named subdiagrams.

use log::debug;

use tessera_core::{geometry::Cardinal, name::Label};

use crate::{TesseraError, creation::make_path, diagram::Diagram};

impl Diagram {
    /// Draws a straight line between the centers of two named subdiagrams.
    ///
    /// Shorthand for [`connect_outer`](Self::connect_outer) with
    /// [`Cardinal::Center`] on both ends.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::NameNotFound`] if either name is absent.
    pub fn connect(
        &self,
        from: impl Label,
        to: impl Label,
    ) -> Result<Diagram, TesseraError> {
        self.connect_outer(from, Cardinal::Center, to, Cardinal::Center)
    }

    /// Draws a straight line from an anchor of one named subdiagram to an
    /// anchor of another.
    ///
    /// Both bounding boxes are looked up in this diagram's frame. The result
    /// is this diagram overlaid on the connecting line.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::NameNotFound`] if either name is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tessera::{creation::circle, geometry::Cardinal};
    /// # fn main() -> Result<(), tessera::TesseraError> {
    /// let pair = circle(1.0)?.named("A").beside(&circle(1.0)?.named("B"));
    /// let linked = pair.connect_outer("A", Cardinal::East, "B", Cardinal::West)?;
    /// assert_eq!(linked.width(), pair.width());
    ///
    /// assert!(pair.connect("A", "missing").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn connect_outer(
        &self,
        from: impl Label,
        from_anchor: Cardinal,
        to: impl Label,
        to_anchor: Cardinal,
    ) -> Result<Diagram, TesseraError> {
        let start = self
            .anchor(&from, from_anchor)
            .ok_or_else(|| TesseraError::NameNotFound(from.to_string()))?;
        let end = self
            .anchor(&to, to_anchor)
            .ok_or_else(|| TesseraError::NameNotFound(to.to_string()))?;

        debug!(
            from = from.to_string(),
            from_anchor = from_anchor.label(),
            to = to.to_string(),
            to_anchor = to_anchor.label();
            "Connecting subdiagrams"
        );

        let line = make_path([start, end])?;
        Ok(self.atop(&line))
    }
}
