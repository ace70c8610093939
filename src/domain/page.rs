// Page domain model - everything a client needs to draw one view
use super::telemetry::{ChartData, TileData};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Normal,
    Warning,
    Critical,
    Info,
    Neutral,
}

impl Tone {
    /// Tone for a free-form subsystem status such as "Critical" or "80%".
    pub fn from_status(status: &str) -> Tone {
        match status {
            "Normal" => Tone::Normal,
            "Warning" => Tone::Warning,
            "Critical" => Tone::Critical,
            s if s.contains('%') => Tone::Normal,
            _ => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelRow {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl PanelRow {
    pub fn new(label: &str, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            tone,
        }
    }
}

/// A static text card: key/value rows and free-form bullet items.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub rows: Vec<PanelRow>,
    pub items: Vec<String>,
}

impl Panel {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            link: None,
            rows: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn link(mut self, path: String) -> Self {
        self.link = Some(path);
        self
    }

    pub fn row(mut self, label: &str, value: impl Into<String>, tone: Tone) -> Self {
        self.rows.push(PanelRow::new(label, value, tone));
        self
    }

    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.items.push(text.into());
        self
    }

    #[cfg(test)]
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

/// A selectable view parameter such as the time range or vibration axis.
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub name: String,
    pub options: Vec<String>,
    pub selected: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub route: String,
    pub title: String,
    pub subtitle: String,
    pub status: PageStatus,
    pub back: Option<String>,
    pub controls: Vec<Control>,
    pub tiles: Vec<TileData>,
    pub charts: Vec<ChartData>,
    pub panels: Vec<Panel>,
    pub generated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(route: String, title: &str, subtitle: &str, back: Option<String>) -> Self {
        Self {
            route,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            status: PageStatus::Ok,
            back,
            controls: Vec::new(),
            tiles: Vec::new(),
            charts: Vec::new(),
            panels: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn not_found(route: String, message: &str) -> Self {
        let mut page = Self::new(route, message, "", Some("/".to_string()));
        page.status = PageStatus::NotFound;
        page
    }

    #[cfg(test)]
    pub fn chart(&self, id: &str) -> Option<&ChartData> {
        self.charts.iter().find(|c| c.id == id)
    }

    #[cfg(test)]
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    #[cfg(test)]
    pub fn tile(&self, id: &str) -> Option<&TileData> {
        self.tiles.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_from_status() {
        assert_eq!(Tone::from_status("Critical"), Tone::Critical);
        assert_eq!(Tone::from_status("80%"), Tone::Normal);
        assert_eq!(Tone::from_status("Bearing"), Tone::Neutral);
    }

    #[test]
    fn test_not_found_page_links_home() {
        let page = Page::not_found("/motor/9".to_string(), "Motor not found");
        assert_eq!(page.status, PageStatus::NotFound);
        assert_eq!(page.back.as_deref(), Some("/"));
        assert!(page.charts.is_empty());
    }

    #[test]
    fn test_panel_lookup() {
        let panel = Panel::new("p", "Panel").row("Status", "Warning", Tone::Warning);
        assert_eq!(panel.value_of("Status"), Some("Warning"));
        assert_eq!(panel.value_of("Missing"), None);
    }
}
