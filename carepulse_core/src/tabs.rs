use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("no tab with id {0:?}")]
    UnknownTab(String),
}

/// Ordered tab ids and the one that is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: Option<usize>,
}

impl TabSet {
    /// The default tab is used when it names one of `ids`, otherwise the first
    /// tab is active.
    pub fn new<I, S>(ids: I, default: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let active = default
            .and_then(|d| ids.iter().position(|id| id == d))
            .or(if ids.is_empty() { None } else { Some(0) });
        Self { ids, active }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.ids[i].as_str())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn select(&mut self, id: &str) -> Result<(), TabError> {
        let index = self
            .ids
            .iter()
            .position(|t| t == id)
            .ok_or_else(|| TabError::UnknownTab(id.to_string()))?;
        self.active = Some(index);
        Ok(())
    }
}

/// Position of the sliding indicator under the active tab.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorStyle {
    pub left: f64,
    pub width: f64,
}

impl IndicatorStyle {
    pub fn css(&self) -> String {
        format!("left: {}px; width: {}px;", self.left, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab() {
        let tabs = TabSet::new(["revenue", "patients", "performance"], Some("patients"));
        assert_eq!(tabs.active(), Some("patients"));
        assert_eq!(tabs.active_index(), Some(1));
    }

    #[test]
    fn test_falls_back_to_first() {
        let tabs = TabSet::new(["revenue", "patients"], None);
        assert_eq!(tabs.active(), Some("revenue"));

        let tabs = TabSet::new(["revenue", "patients"], Some("billing"));
        assert_eq!(tabs.active(), Some("revenue"));

        let tabs = TabSet::new(Vec::<String>::new(), Some("revenue"));
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn test_select() {
        let mut tabs = TabSet::new(["revenue", "patients", "performance"], None);
        tabs.select("performance").unwrap();
        assert!(tabs.is_active("performance"));
        assert_eq!(
            tabs.select("billing"),
            Err(TabError::UnknownTab("billing".to_string()))
        );
        assert!(tabs.is_active("performance"));
    }

    #[test]
    fn test_indicator_css() {
        let style = IndicatorStyle {
            left: 4.0,
            width: 86.5,
        };
        assert_eq!(style.css(), "left: 4px; width: 86.5px;");
    }
}
