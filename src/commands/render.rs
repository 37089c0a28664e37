//! Terminal rendering helpers shared by the dashboard commands.

use agentry::api::Agent;
use agentry::store::Pager;
use agentry::wallet;

/// Stand-in glyphs for agents whose image URL is a placeholder.
const BOT_GLYPHS: [&str; 5] = ["🤖", "👾", "🦾", "🧠", "✨"];

/// Pick a stable glyph for an agent by hashing its id, so the same agent
/// always renders with the same face.
pub fn bot_glyph(agent_id: &str) -> &'static str {
    let sum: usize = agent_id.bytes().map(usize::from).sum();
    BOT_GLYPHS[sum % BOT_GLYPHS.len()]
}

fn image_label(agent: &Agent) -> String {
    if agent.has_placeholder_image() {
        bot_glyph(&agent.id).to_string()
    } else {
        agent.image_url.clone()
    }
}

/// One storefront card: glyph, name, status, owner, tokens, and the first
/// line of the description.
pub fn print_agent_card(agent: &Agent) {
    let name = if agent.name.is_empty() {
        agent.id.as_str()
    } else {
        agent.name.as_str()
    };

    println!("{} {}  [{}]", image_label(agent), name, agent.status.as_str());
    if let Some(domain) = &agent.domain {
        println!("   domain: {domain}");
    }
    println!(
        "   owner: {}  tokens: {}",
        wallet::truncate(&agent.owner_wallet),
        agent.tokens
    );
    if let Some(line) = agent.description.lines().next()
        && !line.is_empty()
    {
        println!("   {line}");
    }
}

/// The full single-agent layout used by `show`.
pub fn print_agent_detail(agent: &Agent) {
    println!(
        "{} {}  [{}]",
        image_label(agent),
        agent.name,
        agent.status.as_str()
    );
    println!("id     : {}", agent.id);
    println!("owner  : {}", wallet::truncate(&agent.owner_wallet));
    println!("tokens : {}", agent.tokens);
    if let Some(domain) = &agent.domain {
        println!("domain : {domain}");
    }
    if !agent.description.is_empty() {
        println!();
        println!("{}", agent.description);
    }
    if !agent.conversation_starters.is_empty() {
        println!();
        println!("Conversation starters:");
        for starter in &agent.conversation_starters {
            println!("  - {starter}");
        }
    }
}

/// The numbered strip, e.g. `1 ... 3 4 [5] 6 7 ... 9`.
pub fn pagination_strip(pager: &Pager) -> String {
    let window = pager.page_window();
    let mut parts: Vec<String> = Vec::new();

    if window.leading_gap {
        parts.push("1".to_string());
        parts.push("...".to_string());
    }
    for page in &window.pages {
        if *page == pager.current_page() {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.trailing_gap {
        parts.push("...".to_string());
        parts.push(pager.total_pages().to_string());
    }

    parts.join(" ")
}

/// Print the navigation strip and the page summary line, if the controls
/// should be visible at all.
pub fn print_pagination(pager: &Pager, items_on_page: usize) {
    if !pager.controls_visible(items_on_page) {
        return;
    }

    let prev = if pager.has_prev() { "<" } else { " " };
    let next = if pager.has_next() { ">" } else { " " };
    println!();
    println!("  {prev} {} {next}", pagination_strip(pager));
    if pager.has_count() {
        println!(
            "  Page {} of {} ({} agents)",
            pager.current_page(),
            pager.total_pages(),
            pager.total_count()
        );
    } else {
        println!("  Page {}", pager.current_page());
    }
}
