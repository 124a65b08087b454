use content::NavSection;
use ui::{SECTION_MARGIN, StoryBlock, StoryState};

fn position(block: StoryBlock) -> usize {
    StoryBlock::ORDER
        .iter()
        .position(|b| *b == block)
        .expect("block is laid out")
}

#[test]
fn crater_viewer_follows_timeline_before_did_you_mean() {
    assert_eq!(StoryBlock::ORDER[0], StoryBlock::Hero);
    assert!(position(StoryBlock::Timeline) < position(StoryBlock::CraterModel));
    assert!(position(StoryBlock::CraterModel) < position(StoryBlock::DidYouMean));
    assert!(position(StoryBlock::DidYouMean) < position(StoryBlock::Charts));
    assert_eq!(StoryBlock::ORDER[StoryBlock::ORDER.len() - 1], StoryBlock::Footer);
}

#[test]
fn every_nav_section_has_exactly_one_block() {
    for section in NavSection::ALL {
        let count = StoryBlock::ORDER
            .iter()
            .filter(|b| b.nav_section() == Some(section))
            .count();
        assert_eq!(count, 1, "{section:?}");
    }
}

#[test]
fn nav_sections_appear_in_nav_bar_order() {
    let laid_out: Vec<NavSection> = StoryBlock::ORDER
        .iter()
        .filter_map(|b| b.nav_section())
        .collect();
    assert_eq!(laid_out, NavSection::ALL.to_vec());
}

#[test]
fn jumps_land_on_the_section_not_a_header_height_above() {
    let mut story = StoryState::default();
    story.spy.record_top(NavSection::Faq, 3000.0);
    story.spy.request_jump(NavSection::Faq);
    assert_eq!(story.spy.take_jump(), Some(3000.0 - SECTION_MARGIN));

    story.spy.record_top(NavSection::Timeline, 600.0);
    assert_eq!(story.spy.active_section(560.0), None);
    assert_eq!(
        story.spy.active_section(600.0 - SECTION_MARGIN),
        Some(NavSection::Timeline)
    );
}

#[test]
fn first_faq_item_starts_open() {
    let story = StoryState::default();
    assert!(story.faq.is_open(0));
    assert_eq!(story.scroll_y, 0.0);
}
