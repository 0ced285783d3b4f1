use super::generation::GenerationCounter;
use super::selection::SelectableList;
use crate::config::ExternalLink;
use crate::error::{Result, RvarError};
use crate::types::DetailTarget;

/// Request for the server-rendered detail of a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub target: DetailTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailStatus {
    #[default]
    Idle,
    Loading,
    Loaded(String),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    ToggleMember(usize),
    HoverMember(Option<usize>),
}

/// The variation detail tab
pub struct DetailView {
    target: Option<DetailTarget>,
    members: SelectableList<String>,
    links: Vec<ExternalLink>,
    generation: GenerationCounter,
    status: DetailStatus,
}

impl DetailView {
    pub fn new(links: Vec<ExternalLink>) -> Self {
        Self {
            target: None,
            members: SelectableList::default(),
            links,
            generation: GenerationCounter::new(),
            status: DetailStatus::Idle,
        }
    }

    pub fn target(&self) -> Option<&DetailTarget> {
        self.target.as_ref()
    }

    pub fn members(&self) -> &SelectableList<String> {
        &self.members
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    /// Switch to `target` and request its detail page
    pub fn show(&mut self, target: DetailTarget) -> DetailRequest {
        log::info!("Showing detail for {}", target.display);
        self.members.replace(target.members.clone());
        self.target = Some(target.clone());
        self.status = DetailStatus::Loading;
        DetailRequest {
            generation: self.generation.issue(),
            target,
        }
    }

    pub fn complete(&mut self, generation: u64, result: Result<String>) -> Result<()> {
        self.generation.check(generation)?;
        match result {
            Ok(body) => {
                self.status = DetailStatus::Loaded(body);
                Ok(())
            }
            Err(e) => {
                let reason = match &e {
                    RvarError::FetchFailed { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                self.status = DetailStatus::Failed(reason);
                Err(e)
            }
        }
    }

    pub fn handle_event(&mut self, event: DetailEvent) {
        match event {
            DetailEvent::ToggleMember(index) => {
                self.toggle_member(index);
            }
            DetailEvent::HoverMember(index) => self.hover_member(index),
        }
    }

    pub fn toggle_member(&mut self, index: usize) -> bool {
        self.members.toggle(index)
    }

    pub fn hover_member(&mut self, index: Option<usize>) {
        self.members.set_hovered(index);
    }

    /// (label, url) of every configured link for `vrn`
    pub fn links_for(&self, vrn: &str) -> Vec<(String, String)> {
        self.links
            .iter()
            .map(|link| (link.label.clone(), link.resolve(vrn)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> DetailTarget {
        DetailTarget {
            members: vec!["rs123".to_string(), "rs456".to_string()],
            display: "rs123, rs456".to_string(),
            url: "http://localhost:8080/varview?vrn=rs123%2C+rs456".to_string(),
        }
    }

    #[test]
    fn test_detail_body_loaded_for_latest_target() {
        let mut view = DetailView::new(Vec::new());
        let request = view.show(target());
        assert_eq!(view.status(), &DetailStatus::Loading);
        assert_eq!(request.target.url, "http://localhost:8080/varview?vrn=rs123%2C+rs456");

        view.complete(request.generation, Ok("<h1>rs123</h1>".to_string()))
            .unwrap();
        assert_eq!(view.status(), &DetailStatus::Loaded("<h1>rs123</h1>".to_string()));
    }

    #[test]
    fn test_stale_detail_is_discarded() {
        let mut view = DetailView::new(Vec::new());
        let first = view.show(target());
        let second = view.show(DetailTarget {
            members: vec!["rs9".to_string()],
            display: "rs9".to_string(),
            url: "http://localhost:8080/varview?vrn=rs9".to_string(),
        });

        view.complete(second.generation, Ok("rs9 detail".to_string()))
            .unwrap();
        let late = view.complete(first.generation, Ok("rs123 detail".to_string()));

        assert!(matches!(late, Err(RvarError::StaleResponse { .. })));
        assert_eq!(view.status(), &DetailStatus::Loaded("rs9 detail".to_string()));
        assert_eq!(view.target().map(|t| t.display.as_str()), Some("rs9"));
    }

    #[test]
    fn test_failed_detail_keeps_reason() {
        let mut view = DetailView::new(Vec::new());
        let request = view.show(target());
        let result = view.complete(
            request.generation,
            Err(RvarError::fetch_failed("/varview", "404 Not Found")),
        );

        assert!(result.is_err());
        assert_eq!(view.status(), &DetailStatus::Failed("404 Not Found".to_string()));
    }

    #[test]
    fn test_show_replaces_members() {
        let mut view = DetailView::new(Vec::new());
        view.show(target());
        view.toggle_member(1);

        view.show(DetailTarget {
            members: vec!["rs9".to_string()],
            display: "rs9".to_string(),
            url: String::new(),
        });
        assert_eq!(view.members().items(), ["rs9".to_string()]);
        assert_eq!(view.members().selected(), None);
    }

    #[test]
    fn test_links_for_member() {
        let view = DetailView::new(vec![ExternalLink::new(
            "SNPedia",
            "https://www.snpedia.com/index.php/{vrn}",
        )]);
        assert_eq!(
            view.links_for("rs123"),
            vec![(
                "SNPedia".to_string(),
                "https://www.snpedia.com/index.php/rs123".to_string()
            )]
        );
    }
}
