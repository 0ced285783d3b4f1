use super::panels::{LeftPanel, MainPanel};
use super::services::BackendService;
use super::state::{AppState, Tab, UiEvents};
use crate::browser::{
    BrowserEffect, BrowserEvent, DetailView, PersonalPage, TraitBrowser, VariationGrid,
};
use crate::config::AppConfig;
use crate::data::{HttpBackend, VariationBackend};
use crate::error::{Result, RvarError};
use std::sync::Arc;
use std::time::Duration;

pub struct RvarApp {
    state: AppState,
    browser: TraitBrowser,
    grid: VariationGrid,
    detail: DetailView,
    personal: PersonalPage,
    service: BackendService,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl RvarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        let backend = HttpBackend::new(&config.backend)?;
        Self::with_backend(&config, Arc::new(backend))
    }

    pub fn with_backend(config: &AppConfig, backend: Arc<dyn VariationBackend>) -> Result<Self> {
        let detail_endpoint = config.backend.endpoint(&config.backend.detail_path)?;
        let mut app = Self {
            state: AppState::new(),
            browser: TraitBrowser::new(
                config.browser.phenotypes.clone(),
                config.browser.default_limit,
                detail_endpoint,
            ),
            grid: VariationGrid::new(config.browser.grid_rows),
            detail: DetailView::new(config.browser.links.clone()),
            personal: PersonalPage::new(config.personal.user().map(str::to_string)),
            service: BackendService::new(backend),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        };

        let grid_request = app.grid.load();
        app.service.fetch_grid(grid_request)?;
        app.refresh_personal()?;
        Ok(app)
    }

    fn refresh_personal(&mut self) -> Result<()> {
        if let Some(request) = self.personal.load() {
            self.service.fetch_upload(request)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, events: UiEvents) {
        for event in events.browser {
            if let Err(e) = self.dispatch_browser(event) {
                self.report(e);
            }
        }
        for event in events.grid {
            if let Some(request) = self.grid.handle_event(event) {
                if let Err(e) = self.service.fetch_grid(request) {
                    self.report(e);
                }
            }
        }
        for event in events.detail {
            self.detail.handle_event(event);
        }
        if events.refresh_personal {
            if let Err(e) = self.refresh_personal() {
                self.report(e);
            }
        }
    }

    fn dispatch_browser(&mut self, event: BrowserEvent) -> Result<()> {
        match self.browser.handle_event(event)? {
            BrowserEffect::None => {}
            BrowserEffect::Fetch(request) => {
                self.state.status_message = format!("Loading {}...", request.state.phenotype);
                self.service.fetch_page(request)?;
            }
            BrowserEffect::Navigate(target) => {
                let lookups = self.personal.lookup_genotypes(&target.members);
                let request = self.detail.show(target);
                self.state.active_tab = Tab::Detail;
                self.service.fetch_detail(request)?;
                self.service.fetch_genotypes(lookups)?;
            }
        }
        Ok(())
    }

    /// Apply finished fetches; results for superseded requests are dropped
    fn poll_backend(&mut self) {
        for done in self.service.poll_pages() {
            match self.browser.complete(done.generation, done.output) {
                Ok(count) => {
                    log::debug!("Rendered {} variation groups", count);
                    self.state.mark_loaded("variations");
                }
                Err(e) => self.report(e),
            }
        }
        for done in self.service.poll_grid() {
            match self.grid.complete(done.generation, done.output) {
                Ok(_) => self.state.mark_loaded("variation grid"),
                Err(e) => self.report(e),
            }
        }
        for done in self.service.poll_detail() {
            match self.detail.complete(done.generation, done.output) {
                Ok(()) => self.state.mark_loaded("variation detail"),
                Err(e) => self.report(e),
            }
        }
        for done in self.service.poll_upload() {
            if let Err(e) = self.personal.complete_upload(done.generation, done.output) {
                self.report(e);
            }
        }
        for done in self.service.poll_genotypes() {
            let (vrn, result) = done.output;
            if let Err(e) = self.personal.complete_genotype(done.generation, &vrn, result) {
                self.report(e);
            }
        }
    }

    fn report(&mut self, error: RvarError) {
        match error {
            RvarError::StaleResponse { received, latest } => {
                log::debug!("Discarded response {} (latest {})", received, latest);
            }
            other => {
                log::warn!("{}", other);
                self.state.status_message = other.to_string();
            }
        }
    }
}

impl eframe::App for RvarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_backend();

        let mut events = UiEvents::default();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("rvar");
                ui.separator();
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.state.active_tab, tab, tab.title());
                }
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.service.is_busy() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                if let Some(loaded) = self.state.last_loaded {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("Last update: {}", loaded.format("%H:%M:%S")));
                    });
                }
            });
        });

        egui::SidePanel::left("left_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state, &self.browser, &mut events);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(
                ui,
                &self.state,
                &self.browser,
                &self.grid,
                &self.detail,
                &self.personal,
                &mut events,
            );
        });

        if !events.is_empty() {
            self.dispatch(events);
            ctx.request_repaint();
        }

        if self.service.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{DetailStatus, ListStatus};
    use crate::types::{DetailTarget, GridPage, GridQuery, PageResult, PageState, VariationGroup};
    use std::time::Instant;

    struct StaticBackend;

    impl VariationBackend for StaticBackend {
        fn trait_variations(&self, state: &PageState) -> Result<PageResult> {
            Ok(PageResult {
                groups: vec![VariationGroup::new(vec![
                    format!("rs{}", state.start + 1),
                    format!("rs{}", state.start + 2),
                ])],
                has_more: true,
                has_less: state.start > 0,
            })
        }

        fn variation_grid(&self, _query: &GridQuery) -> Result<GridPage> {
            Ok(GridPage::default())
        }

        fn upload_form(&self) -> Result<String> {
            Ok("upload".to_string())
        }

        fn variation_detail(&self, target: &DetailTarget) -> Result<String> {
            Ok(format!("detail of {}", target.url))
        }

        fn genotype(&self, _user: &str, vrn: &str) -> Result<String> {
            Ok(format!("{}:AG", vrn))
        }
    }

    fn settle(app: &mut RvarApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            app.poll_backend();
            if !app.service.is_busy() || Instant::now() >= deadline {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn app(user: Option<&str>) -> RvarApp {
        let mut config = AppConfig::default();
        config.personal.user = user.map(str::to_string);
        RvarApp::with_backend(&config, Arc::new(StaticBackend)).unwrap()
    }

    #[test]
    fn test_select_and_open_detail() {
        let mut app = app(Some("ada"));
        app.dispatch_browser(BrowserEvent::SelectPhenotype(0)).unwrap();
        settle(&mut app);

        assert_eq!(app.browser.rendered().status, ListStatus::Loaded);
        assert_eq!(app.browser.rendered().items[0].display, "rs1, rs2");

        app.dispatch_browser(BrowserEvent::ItemClicked(0)).unwrap();
        settle(&mut app);

        assert!(app.state.last_loaded.is_some());
        assert_eq!(app.state.active_tab, Tab::Detail);
        assert_eq!(app.detail.target().map(|t| t.display.as_str()), Some("rs1, rs2"));
        let expected = "detail of http://localhost:8080/varview?vrn=rs1%2C+rs2";
        assert_eq!(app.detail.status(), &DetailStatus::Loaded(expected.to_string()));
        assert_eq!(
            app.personal.genotype("rs2"),
            Some(&crate::browser::GenotypeStatus::Loaded("rs2:AG".to_string()))
        );
        assert_eq!(app.personal.details(), "upload");
    }

    #[test]
    fn test_failure_keeps_last_update_time() {
        let mut app = app(None);
        settle(&mut app);
        let loaded = app.state.last_loaded;
        assert!(loaded.is_some());

        app.report(RvarError::fetch_failed("/health/variations", "timed out"));
        assert_eq!(app.state.last_loaded, loaded);
        assert!(app.state.status_message.contains("timed out"));
    }

    #[test]
    fn test_anonymous_user_gets_no_genotypes() {
        let mut app = app(None);
        app.dispatch_browser(BrowserEvent::SelectPhenotype(0)).unwrap();
        settle(&mut app);
        app.dispatch_browser(BrowserEvent::ItemClicked(0)).unwrap();

        assert!(app.personal.genotypes().is_empty());
        assert_eq!(app.personal.title(), crate::browser::LOGIN_PROMPT);
    }
}
