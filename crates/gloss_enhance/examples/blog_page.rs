//! Headless Blog Page Walkthrough
//!
//! Builds a small blog-shaped page in memory, enhances it, and simulates a
//! reading session:
//! - scroll partway down (progress bar stretches, header parallaxes)
//! - hover a card (lift and glow)
//! - click a table-of-contents anchor (smooth scroll command)
//! - bring a post into view (one-shot entrance animation)
//! - click back-to-top
//!
//! Run with: cargo run -p gloss_enhance --example blog_page

use gloss_core::{HeadlessSurface, PageNode, Surface};
use gloss_enhance::{EnhanceConfig, Enhancer, BACK_TO_TOP_ID, PROGRESS_BAR_ID};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // ── The page ─────────────────────────────────────────────────────────
    let mut page = HeadlessSurface::new();
    page.set_extent(3200.0, 800.0);

    page.insert(PageNode::new("body"));
    let header = page.insert(PageNode::new("header").class("page-header"));
    let subtitle = page.insert(PageNode::new("div").with_id("subtitle"));
    let toc_link = page.insert(PageNode::new("a").attr("href", "#conclusion"));
    let post = page.insert(PageNode::new("article").class("post-item"));
    let widget = page.insert(PageNode::new("div").class("card-widget"));
    let recent = page.insert(PageNode::new("div").class("recent-post-item"));
    page.insert(PageNode::new("h2").with_id("conclusion"));

    // ── Enhance it ───────────────────────────────────────────────────────
    let mut enhancer = Enhancer::new(EnhanceConfig::default());
    enhancer.run(&mut page);

    println!("glass widget: {:?}", page.style(widget).unwrap().backdrop_blur);
    println!("subtitle fill: {:?}", page.style(subtitle).unwrap().text_fill);
    println!("post hidden at: {:?}", page.style(post).unwrap().opacity);

    // ── A reading session ────────────────────────────────────────────────
    fn deliver(page: &mut HeadlessSurface, enhancer: &mut Enhancer) {
        for mut event in page.take_events() {
            enhancer.handle_event(page, &mut event);
        }
    }

    // Scroll a third of the way down
    page.scroll_to(800.0);
    deliver(&mut page, &mut enhancer);
    let bar = page.find_by_id(PROGRESS_BAR_ID).unwrap();
    println!("progress width: {:?}", page.style(bar).unwrap().width);
    println!("header parallax: {:?}", page.style(header).unwrap().transform);

    // Hover the recent-posts card
    page.pointer_enter(recent);
    deliver(&mut page, &mut enhancer);
    println!("hovered card: {:?}", page.style(recent).unwrap().transform);
    page.pointer_leave(recent);
    deliver(&mut page, &mut enhancer);

    // The post scrolls into view and reveals itself
    page.set_visibility(post, 0.4);
    deliver(&mut page, &mut enhancer);
    println!("revealed post: {:?}", page.style(post).unwrap().opacity);

    // Jump to the conclusion via the TOC link
    page.click(toc_link);
    deliver(&mut page, &mut enhancer);

    // And back to the top
    let button = page.find_by_id(BACK_TO_TOP_ID).unwrap();
    page.click(button);
    deliver(&mut page, &mut enhancer);

    println!("scroll commands: {:?}", page.scroll_commands());
    println!("offset after back-to-top: {}", page.metrics().scroll_offset);
}
