use crate::content::PortfolioProject;

/// State of the project image viewer.
///
/// The viewer walks the sequence `[hero, gallery[0], .., gallery[n-1]]`, so a
/// project with `n` gallery images has `n + 1` positions. Index 0 is the hero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryViewer {
    project: Option<&'static PortfolioProject>,
    index: usize,
}

impl GalleryViewer {
    pub fn open(&mut self, project: &'static PortfolioProject) {
        self.project = Some(project);
        self.index = 0;
    }

    pub fn close(&mut self) {
        self.project = None;
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn project(&self) -> Option<&'static PortfolioProject> {
        self.project
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if let Some(project) = self.project {
            self.index = (self.index + 1) % project.image_count();
        }
    }

    pub fn prev(&mut self) {
        if let Some(project) = self.project {
            let len = project.image_count();
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn current_image(&self) -> Option<&'static str> {
        let project = self.project?;
        match self.index {
            0 => Some(project.hero),
            i => project.gallery.get(i - 1).copied(),
        }
    }

    /// 1-based position and total, for the "n / m" counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.project
            .map(|project| (self.index + 1, project.image_count()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryAction {
    Open(&'static PortfolioProject),
    Next,
    Prev,
    Close,
}

impl GalleryViewer {
    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::Open(project) => self.open(project),
            GalleryAction::Next => self.next(),
            GalleryAction::Prev => self.prev(),
            GalleryAction::Close => self.close(),
        }
    }

    /// Maps a keyboard key to a viewer action while the viewer is open.
    /// Arrow keys follow reading direction, so they swap in right-to-left layouts.
    pub fn key_action(&self, key: &str, rtl: bool) -> Option<GalleryAction> {
        if !self.is_open() {
            return None;
        }
        match (key, rtl) {
            ("Escape", _) => Some(GalleryAction::Close),
            ("ArrowRight", false) | ("ArrowLeft", true) => Some(GalleryAction::Next),
            ("ArrowLeft", false) | ("ArrowRight", true) => Some(GalleryAction::Prev),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{find_project, PORTFOLIO_PROJECTS};

    fn opened(id: &str) -> GalleryViewer {
        let mut viewer = GalleryViewer::default();
        viewer.open(find_project(id).unwrap());
        viewer
    }

    #[test]
    fn opening_shows_the_hero_image() {
        for project in PORTFOLIO_PROJECTS {
            let mut viewer = GalleryViewer::default();
            viewer.open(project);
            assert_eq!(viewer.current_image(), Some(project.hero));
            assert_eq!(viewer.position(), Some((1, project.gallery.len() + 1)));
        }
    }

    #[test]
    fn reopening_resets_the_index() {
        let mut viewer = opened("sudi");
        viewer.next();
        viewer.next();
        viewer.open(find_project("bry").unwrap());
        assert_eq!(viewer.index(), 0);
        assert_eq!(viewer.current_image(), Some(find_project("bry").unwrap().hero));
    }

    #[test]
    fn next_walks_gallery_in_order_and_wraps_to_hero() {
        let project = find_project("onmen").unwrap();
        let mut viewer = opened("onmen");
        for expected in project.gallery {
            viewer.next();
            assert_eq!(viewer.current_image(), Some(*expected));
        }
        viewer.next();
        assert_eq!(viewer.index(), 0);
        assert_eq!(viewer.current_image(), Some(project.hero));
    }

    #[test]
    fn prev_from_hero_wraps_to_last_image() {
        let project = find_project("durrat").unwrap();
        let mut viewer = opened("durrat");
        viewer.prev();
        assert_eq!(viewer.index(), project.gallery.len());
        assert_eq!(viewer.current_image(), project.gallery.last().copied());
        assert_eq!(
            viewer.position(),
            Some((project.gallery.len() + 1, project.gallery.len() + 1))
        );
    }

    #[test]
    fn full_cycle_returns_to_start_both_ways() {
        for project in PORTFOLIO_PROJECTS {
            let mut viewer = GalleryViewer::default();
            viewer.open(project);
            for _ in 0..project.image_count() {
                viewer.next();
            }
            assert_eq!(viewer.index(), 0, "{}", project.id);
            for _ in 0..project.image_count() {
                viewer.prev();
            }
            assert_eq!(viewer.index(), 0, "{}", project.id);
        }
    }

    #[test]
    fn closed_viewer_ignores_navigation() {
        let mut viewer = GalleryViewer::default();
        viewer.next();
        viewer.prev();
        assert_eq!(viewer.index(), 0);
        assert_eq!(viewer.current_image(), None);
        assert_eq!(viewer.position(), None);

        let mut viewer = opened("mukhbaza");
        viewer.apply(GalleryAction::Close);
        assert!(!viewer.is_open());
        assert_eq!(viewer.current_image(), None);
    }

    #[test]
    fn keyboard_follows_reading_direction() {
        let viewer = opened("sudi");
        assert_eq!(viewer.key_action("ArrowRight", false), Some(GalleryAction::Next));
        assert_eq!(viewer.key_action("ArrowRight", true), Some(GalleryAction::Prev));
        assert_eq!(viewer.key_action("ArrowLeft", true), Some(GalleryAction::Next));
        assert_eq!(viewer.key_action("Escape", true), Some(GalleryAction::Close));
        assert_eq!(viewer.key_action("Enter", false), None);
        assert_eq!(GalleryViewer::default().key_action("Escape", false), None);
    }
}
