// SPDX-License-Identifier: MPL-2.0
use folio_lens::config::{self, Config, DEFAULT_BREAKPOINT};
use folio_lens::content;
use folio_lens::gallery::{self, GalleryNavigator};
use folio_lens::ui::layout::{self, CopyrightPlacement};
use folio_lens::ui::lightbox;
use folio_lens::ui::panels::{self, PanelId};
use tempfile::tempdir;

const PAGE: &str = r#"
<html><body>
  <div id="main">
    <article class="panel" id="intro"><h2>Intro</h2><p>Welcome.</p></article>
    <div class="thumb">
      <a href="images/fulls/01.jpg" class="image"><img src="images/thumbs/01.jpg" alt=""></a>
      <h3>First</h3><p>One</p>
    </div>
    <div class="thumb">
      <a href="images/fulls/02.jpg" class="image"><img src="images/thumbs/02.jpg" alt=""></a>
      <h3>Second</h3>
    </div>
    <div class="thumb">
      <a href="images/fulls/03.jpg" class="image"><img src="images/thumbs/03.jpg" alt=""></a>
    </div>
  </div>
  <div id="footer"><ul class="copyright"><li>&copy; Folio</li></ul></div>
</body></html>
"#;

#[test]
fn scanned_page_drives_lightbox_navigation() {
    let items = gallery::scan_document(PAGE);
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].target, "images/fulls/01.jpg");

    let mut navigator = GalleryNavigator::new(items);
    let mut overlay = lightbox::State::new(navigator.len());

    // Open the first item, then step right twice: 0 -> 1 -> 2.
    assert_eq!(
        overlay.handle(lightbox::Message::Open(0)),
        lightbox::Effect::Opened { index: 0 }
    );
    for expected in [1, 2] {
        let effect = overlay.handle(lightbox::Message::Next);
        assert_eq!(effect, lightbox::Effect::Navigated { index: expected });
        navigator.set_current(expected);
    }
    assert_eq!(navigator.current_index(), Some(2));

    // One more step wraps back to the first item.
    assert_eq!(
        overlay.handle(lightbox::Message::Next),
        lightbox::Effect::Navigated { index: 0 }
    );
    assert_eq!(
        overlay.handle(lightbox::Message::Previous),
        lightbox::Effect::Navigated { index: 2 }
    );
}

#[test]
fn lightbox_stays_loading_until_signaled() {
    let items = gallery::scan_document(PAGE);
    let mut overlay = lightbox::State::new(items.len());

    overlay.handle(lightbox::Message::Open(1));
    assert!(overlay.is_loading());

    // Navigating before the load finishes re-enters the loading phase.
    overlay.handle(lightbox::Message::LoadFinished);
    assert!(!overlay.is_loading());
    overlay.handle(lightbox::Message::Next);
    assert!(overlay.is_loading());

    overlay.handle(lightbox::Message::Close);
    assert!(!overlay.is_open());
}

#[test]
fn escape_closes_overlay_without_touching_panels() {
    let items = gallery::scan_document(PAGE);
    let mut overlay = lightbox::State::new(items.len());
    let mut toggler = panels::State::default();

    toggler.handle(panels::Message::Toggle(PanelId::About));
    overlay.handle(lightbox::Message::Open(0));

    // Escape routing: the open overlay takes the key, the panels do not.
    assert_eq!(
        overlay.handle(lightbox::Message::Close),
        lightbox::Effect::Closed
    );
    assert!(toggler.is_active(PanelId::About));

    // With the overlay closed the next Escape reaches the panels.
    assert_eq!(
        toggler.handle(panels::Message::Escape),
        panels::Effect::ContentActive(false)
    );
    assert!(!toggler.any_active());
}

#[test]
fn panels_are_mutually_exclusive() {
    let mut toggler = panels::State::default();

    toggler.handle(panels::Message::Toggle(PanelId::Intro));
    toggler.handle(panels::Message::Toggle(PanelId::Work));
    toggler.handle(panels::Message::Toggle(PanelId::Contact));

    let active: Vec<_> = PanelId::ALL
        .into_iter()
        .filter(|id| toggler.is_active(*id))
        .collect();
    assert_eq!(active, vec![PanelId::Contact]);

    // Outside clicks with nothing active change nothing.
    toggler.handle(panels::Message::OutsideClick);
    assert_eq!(
        toggler.handle(panels::Message::OutsideClick),
        panels::Effect::None
    );
}

#[test]
fn panel_text_comes_from_the_page() {
    assert_eq!(
        content::panel_text(PAGE, PanelId::Intro.slug()).as_deref(),
        Some("Welcome.")
    );
    assert!(content::panel_text(PAGE, PanelId::Work.slug()).is_none());
}

#[test]
fn copyright_moves_into_header_at_the_breakpoint() {
    assert_eq!(
        layout::copyright_placement(1280.0, DEFAULT_BREAKPOINT),
        CopyrightPlacement::Footer
    );
    assert_eq!(
        layout::copyright_placement(DEFAULT_BREAKPOINT, DEFAULT_BREAKPOINT),
        CopyrightPlacement::Header
    );
    assert_eq!(
        layout::copyright_placement(640.0, DEFAULT_BREAKPOINT),
        CopyrightPlacement::Header
    );
}

#[test]
fn breakpoint_override_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let custom = Config {
        breakpoint: Some(1200.0),
        ..Config::default()
    };
    config::save_to_path(&custom, &temp_config_file_path).expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    assert_eq!(
        layout::copyright_placement(1100.0, loaded.breakpoint()),
        CopyrightPlacement::Header
    );
    assert_eq!(
        layout::copyright_placement(1100.0, Config::default().breakpoint()),
        CopyrightPlacement::Footer
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn wraparound_holds_for_various_gallery_sizes() {
    for count in [1usize, 2, 5, 12] {
        let mut overlay = lightbox::State::new(count);
        overlay.handle(lightbox::Message::Open(count - 1));

        assert_eq!(
            overlay.handle(lightbox::Message::Next),
            lightbox::Effect::Navigated { index: 0 }
        );
        assert_eq!(
            overlay.handle(lightbox::Message::Previous),
            lightbox::Effect::Navigated { index: count - 1 }
        );
    }
}
