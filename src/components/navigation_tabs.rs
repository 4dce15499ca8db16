use crate::{components::QuestionHelper, hooks::use_body_key_down, state::UserSettings};
use leptos::{either::Either, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};
use lucide_leptos::ArrowLeft;
use tracing::{debug, info};

/// One entry of the top level tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub path: &'static str,
    pub label: &'static str,
    /// The tab is active when the pathname contains this.
    pub pattern: &'static str,
}

impl Tab {
    pub const fn new(path: &'static str, label: &'static str, pattern: &'static str) -> Self {
        Self {
            path,
            label,
            pattern,
        }
    }

    pub fn matches(&self, pathname: &str) -> bool {
        pathname.contains(self.pattern)
    }

    pub fn id(&self) -> String {
        format!("{}-nav-link", self.label.to_lowercase())
    }
}

/// Swap, Send and Pool, in display order.
pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new("/swap", "Swap", "/swap"),
        Tab::new("/send", "Send", "/send"),
        Tab::new("/pool", "Pool", "/pool"),
    ]
}

/// The tab `direction` steps away from the one matching `pathname`, wrapping around.
///
/// An unmatched pathname counts as sitting just before the first tab.
pub fn navigate_target(tabs: &[Tab], pathname: &str, direction: isize) -> Option<&'static str> {
    if tabs.is_empty() {
        return None;
    }

    let index = tabs
        .iter()
        .position(|tab| tab.matches(pathname))
        .map_or(-1, |index| index as isize);
    let target = (index + direction).rem_euclid(tabs.len() as isize);

    Some(tabs[target as usize].path)
}

/// What the navigation area shows for a given page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHeader {
    Tabs,
    AddLiquidity,
    RemoveLiquidity,
    ImportPool,
    CreatePool,
}

impl NavHeader {
    pub fn from_pathname(pathname: &str) -> Self {
        if pathname.contains("/add") {
            NavHeader::AddLiquidity
        } else if pathname.contains("/remove") {
            NavHeader::RemoveLiquidity
        } else if pathname.contains("/find") {
            NavHeader::ImportPool
        } else if pathname.contains("/create") {
            NavHeader::CreatePool
        } else {
            NavHeader::Tabs
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NavHeader::Tabs => "",
            NavHeader::AddLiquidity => "Add Liquidity",
            NavHeader::RemoveLiquidity => "Remove Liquidity",
            NavHeader::ImportPool => "Import Pool",
            NavHeader::CreatePool => "Create Pool",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            NavHeader::Tabs => "",
            NavHeader::AddLiquidity => "When you add liquidity, you are given pool tokens that represent your position in this pool. These tokens automatically earn fees proportional to your pool share and can be redeemed at any time.",
            NavHeader::RemoveLiquidity => "Your liquidity is represented by a pool token (VIP180). Removing will convert your position back into tokens at the current rate and proportional to the amount of each token in the pool. Any fees you accrued are included in the token amounts you receive.",
            NavHeader::ImportPool => "Use this tool to find pairs that don't automatically appear in the interface.",
            NavHeader::CreatePool => "Use this interface to create a new pool.",
        }
    }
}

#[component]
pub fn NavigationTabs(tabs: Vec<Tab>) -> impl IntoView {
    info!("rendering <NavigationTabs/>");

    let settings = use_context::<UserSettings>().expect("user settings context missing!");
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let tabs = StoredValue::new(tabs);
    let header = Memo::new(move |_| NavHeader::from_pathname(&pathname.get()));

    let go = move |direction: isize| {
        let current = pathname.get_untracked();
        if let Some(path) = tabs.with_value(|tabs| navigate_target(tabs, &current, direction)) {
            debug!("navigating from {current} to {path}");
            navigate(path, Default::default());
        }
    };
    let go_right = go.clone();

    use_body_key_down("ArrowRight", move || go_right(1));
    use_body_key_down("ArrowLeft", move || go(-1));

    on_cleanup(move || info!("cleaning up <NavigationTabs/>"));

    view! {
        <nav class="nav-tabs" class:dark=move || settings.dark_mode.get()>
            {move || match header.get() {
                NavHeader::Tabs => {
                    Either::Left(
                        tabs
                            .get_value()
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <a
                                        id=tab.id()
                                        href=tab.path
                                        class="nav-link"
                                        class:active=move || tab.matches(&pathname.get())
                                    >
                                        {tab.label}
                                    </a>
                                }
                            })
                            .collect_view(),
                    )
                }
                other => {
                    Either::Right(
                        view! {
                            <div class="flex justify-between items-center p-4 w-full">
                                <A href="/pool">
                                    <ArrowLeft size=20 absolute_stroke_width=true />
                                </A>
                                <div class="font-medium text-xl">{other.title()}</div>
                                <QuestionHelper text=other.help_text() />
                            </div>
                        },
                    )
                }
            }}
        </nav>
    }
}
