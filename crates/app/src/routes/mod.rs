pub mod admin;
pub mod dashboard;
pub mod doctor;
pub mod login;
pub mod nfc;
pub mod not_found;
pub mod nurse;
pub mod patient;
pub mod settings;
pub mod signup;
pub mod sync;

use std::str::FromStr;

use crate::auth::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCloud, LdCreditCard, LdFileText, LdHeartPulse, LdLayoutDashboard, LdLogOut,
    LdSettings, LdSmartphone, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    footer_entries, resolve_navigation_for_key, GuardDecision, GuardState, IconRef,
    NavigationEntry, RoleKey, Session, ENTRY_PATH,
};
use shared_ui::{
    notify, use_sidebar, use_toast, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarSeparator, SidebarTrigger, Spinner, ToastType,
};

use admin::{AdminAnalytics, AdminFiles, AdminPayments, AdminUsers};
use dashboard::{AdminDashboard, DoctorDashboard, NurseDashboard, PatientDashboard};
use doctor::{DoctorPatients, DoctorPrescriptions};
use login::Login;
use nfc::{AdminNfc, DoctorNfc, NurseNfc};
use not_found::NotFound;
use nurse::{NursePatients, NurseReports};
use patient::{PatientBilling, PatientCard, PatientCheckout, PatientRecords};
use settings::Settings;
use signup::Signup;
use sync::{AdminSync, DoctorSync};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(AuthGuard)]
    #[layout(DashboardShell)]
    #[route("/dashboard/settings")]
    Settings {},
    // ── Admin ──
    #[route("/dashboard/admin")]
    AdminDashboard {},
    #[route("/dashboard/admin/users")]
    AdminUsers {},
    #[route("/dashboard/admin/nfc")]
    AdminNfc {},
    #[route("/dashboard/admin/sync")]
    AdminSync {},
    #[route("/dashboard/admin/sync/files")]
    AdminFiles {},
    #[route("/dashboard/admin/analytics")]
    AdminAnalytics {},
    #[route("/dashboard/admin/payments")]
    AdminPayments {},
    // ── Doctor ──
    #[route("/dashboard/doctor")]
    DoctorDashboard {},
    #[route("/dashboard/doctor/patients")]
    DoctorPatients {},
    #[route("/dashboard/doctor/nfc")]
    DoctorNfc {},
    #[route("/dashboard/doctor/sync")]
    DoctorSync {},
    #[route("/dashboard/doctor/prescriptions")]
    DoctorPrescriptions {},
    // ── Nurse ──
    #[route("/dashboard/nurse")]
    NurseDashboard {},
    #[route("/dashboard/nurse/patients")]
    NursePatients {},
    #[route("/dashboard/nurse/nfc")]
    NurseNfc {},
    #[route("/dashboard/nurse/reports")]
    NurseReports {},
    // ── Patient ──
    #[route("/dashboard/patient")]
    PatientDashboard {},
    #[route("/dashboard/patient/records")]
    PatientRecords {},
    #[route("/dashboard/patient/billing")]
    PatientBilling {},
    #[route("/dashboard/patient/card")]
    PatientCard {},
    #[route("/dashboard/patient/checkout")]
    PatientCheckout {},
    #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Route for a navigation path. Paths no route claims land on the 404 page.
pub fn route_for(path: &str) -> Route {
    Route::from_str(path).unwrap_or_else(|_| Route::NotFound {
        segments: path.split('/').filter(|s| !s.is_empty()).map(String::from).collect(),
    })
}

/// Heading shown in the shell's top bar.
pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Settings {} => "Settings",
        Route::AdminDashboard {} | Route::DoctorDashboard {} | Route::NurseDashboard {} | Route::PatientDashboard {} => "Dashboard",
        Route::AdminUsers {} => "User Management",
        Route::AdminNfc {} | Route::DoctorNfc {} | Route::NurseNfc {} => "NFC Cards",
        Route::AdminSync {} | Route::DoctorSync {} => "Cloud Sync",
        Route::AdminFiles {} => "Cloud Files",
        Route::AdminAnalytics {} => "Analytics",
        Route::AdminPayments {} => "Payments",
        Route::DoctorPatients {} | Route::NursePatients {} => "Patients",
        Route::DoctorPrescriptions {} => "Prescriptions",
        Route::NurseReports {} => "Reports",
        Route::PatientRecords {} => "Medical Records",
        Route::PatientBilling {} => "Billing",
        Route::PatientCard {} => "My Card",
        Route::PatientCheckout {} => "Checkout",
        Route::Login {} | Route::Signup {} => "HealthHub",
        Route::NotFound { .. } => "Not Found",
    }
}

fn nav_icon(icon: IconRef) -> Element {
    match icon {
        IconRef::LayoutDashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        IconRef::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        IconRef::Smartphone => rsx! { Icon::<LdSmartphone> { icon: LdSmartphone, width: 18, height: 18 } },
        IconRef::Cloud => rsx! { Icon::<LdCloud> { icon: LdCloud, width: 18, height: 18 } },
        IconRef::BarChart => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
        IconRef::CreditCard => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        IconRef::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        IconRef::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        IconRef::LogOut => rsx! { Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 } },
    }
}

/// Session gate for everything under `/dashboard`.
///
/// Reads the session store once on mount. Until that read admits a session
/// only a spinner renders; a missing session replaces the history entry
/// with the login page.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let mut guard = use_signal(GuardState::default);

    use_effect(move || {
        let stored = session.load();
        let decision = guard.write().check(stored);
        let mut current = session.current;
        match decision {
            GuardDecision::Admit(admitted) => {
                tracing::debug!(role = %admitted.role, "guard verified session");
                if current.peek().as_ref() != Some(&admitted) {
                    current.set(Some(admitted));
                }
            }
            GuardDecision::Redirect(path) => {
                tracing::info!(to = path, "no session; redirecting to login");
                navigator().replace(route_for(path));
            }
        }
    });

    rsx! {
        GuardGate { verified: guard.read().is_verified(), Outlet::<Route> {} }
    }
}

/// Protected children, or only the loading indicator until verified.
#[component]
fn GuardGate(verified: bool, children: Element) -> Element {
    if verified {
        children
    } else {
        rsx! {
            Spinner { label: "Loading..." }
        }
    }
}

/// Rail, top bar and content region for a verified session.
#[component]
fn DashboardShell() -> Element {
    let route: Route = use_route();
    let session = use_session();
    let Some(current) = session.current.read().clone() else {
        return rsx! { Spinner {} };
    };

    let path = route.to_string();
    let title = page_title(&route);
    tracing::debug!(path = %path, "dashboard route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                RailHeader { role: current.role.clone() }
                SidebarSeparator {}
                SidebarContent {
                    SidebarMenu {
                        for entry in resolve_navigation_for_key(current.role.as_str()) {
                            NavItem { key: "{entry.path}", active: entry.is_active(&path), entry: entry.clone() }
                        }
                    }
                }
                SidebarFooter {
                    RailFooter { current_path: path.clone() }
                }
            }
            SidebarInset {
                TopBar { title, session: current.clone() }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Brand and role label. Both hide while the rail is collapsed. An
/// unrecognised role shows its stored key.
#[component]
fn RailHeader(role: RoleKey) -> Element {
    let collapsed = use_sidebar()().collapsed;

    rsx! {
        SidebarHeader {
            div { class: "sidebar-brand",
                span { class: "sidebar-brand-mark",
                    Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 20, height: 20 }
                }
                if !collapsed {
                    div { class: "sidebar-brand-text",
                        span { class: "sidebar-brand-name", "HealthHub" }
                        span { class: "sidebar-brand-role", "{role.display_name()}" }
                    }
                }
            }
            SidebarTrigger {}
        }
    }
}

#[component]
fn NavItem(entry: NavigationEntry, active: bool) -> Element {
    rsx! {
        SidebarMenuItem {
            Link { to: route_for(&entry.path),
                SidebarMenuButton { label: entry.label.clone(), active, icon: nav_icon(entry.icon) }
            }
        }
    }
}

/// Settings link and the logout action.
#[component]
fn RailFooter(current_path: String) -> Element {
    let mut session = use_session();
    let toasts = use_toast();
    let logout = use_callback(move |_: ()| {
        session.sign_out();
        notify(&toasts, ToastType::Info, "Logged Out", "You have been signed out");
        navigator().replace(route_for(ENTRY_PATH));
    });

    rsx! {
        SidebarMenu {
            for entry in footer_entries() {
                if entry.icon == IconRef::LogOut {
                    SidebarMenuItem { key: "{entry.label}",
                        SidebarMenuButton {
                            label: entry.label.clone(),
                            icon: nav_icon(entry.icon),
                            onclick: move |_| logout.call(()),
                        }
                    }
                } else {
                    NavItem { key: "{entry.label}", active: entry.is_active(&current_path), entry: entry.clone() }
                }
            }
        }
    }
}

#[component]
fn TopBar(title: &'static str, session: Session) -> Element {
    let name = session.identity.label();
    let initials = session.identity.initials();

    rsx! {
        header { class: "topbar",
            h1 { class: "topbar-title", "{title}" }
            div { class: "topbar-spacer" }
            div { class: "topbar-user",
                div { class: "topbar-user-text",
                    span { class: "topbar-user-name", "{name}" }
                    span { class: "topbar-user-role", "{session.role.display_name()}" }
                }
                span { class: "topbar-avatar", "{initials}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use services::{MemorySessionStore, SessionStore};
    use shared_types::{resolve_navigation, Identity, Role, StorageKeys, ALL_ROLES};

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn shell_markup() -> Element {
        rsx! {
            nav { class: "sidebar", "Dashboard" }
            main { class: "page-content", "User Management" }
        }
    }

    /// Runs the guard's first check against `store` and renders the gate.
    fn gate_for(store: &MemorySessionStore) -> Element {
        let mut guard = GuardState::default();
        let decision = guard.check(store.get_session());
        let redirected = decision == GuardDecision::Redirect(ENTRY_PATH);
        rsx! {
            span { "redirect={redirected}" }
            GuardGate { verified: guard.is_verified(), {shell_markup()} }
        }
    }

    fn gate_without_session() -> Element {
        gate_for(&MemorySessionStore::new(StorageKeys::default()))
    }

    fn gate_with_admin() -> Element {
        let store = MemorySessionStore::new(StorageKeys::default());
        store.set_session(&Session::new(Role::Admin, Identity::email("admin@hospital.com", "Admin")));
        gate_for(&store)
    }

    #[test]
    fn missing_session_renders_only_the_spinner() {
        let html = render(gate_without_session);
        assert!(html.contains("redirect=true"));
        assert!(html.contains("spinner"));
        assert!(!html.contains("sidebar"));
        assert!(!html.contains("page-content"));
    }

    #[test]
    fn verified_session_renders_the_shell() {
        let html = render(gate_with_admin);
        assert!(html.contains("redirect=false"));
        assert!(html.contains("page-content"));
        assert!(!html.contains("spinner"));
    }

    #[test]
    fn unknown_role_rail_is_the_base_entry() {
        let store = MemorySessionStore::with_entries(StorageKeys::default(), [("userRole", "janitor")]);
        let session = store.get_session().unwrap();
        let rail = resolve_navigation_for_key(session.role.as_str());
        assert_eq!(rail.len(), 1);
        assert_eq!(rail[0].label, "Dashboard");
        assert_eq!(rail[0].path, "/dashboard/janitor");
        assert_eq!(session.role.display_name(), "janitor");
    }

    #[test]
    fn every_rail_path_has_a_route() {
        for role in ALL_ROLES {
            for entry in resolve_navigation(*role).into_iter().chain(footer_entries()) {
                let route = route_for(&entry.path);
                if entry.icon == IconRef::LogOut {
                    assert_eq!(route, Route::Login {});
                } else {
                    assert!(
                        !matches!(route, Route::NotFound { .. }),
                        "{} has no route",
                        entry.path
                    );
                }
                assert_eq!(route.to_string(), entry.path);
            }
        }
    }

    #[test]
    fn rail_paths_resolve_to_their_pages() {
        assert_eq!(route_for("/dashboard/admin/users"), Route::AdminUsers {});
        assert_eq!(route_for("/dashboard/nurse/reports"), Route::NurseReports {});
        assert_eq!(route_for("/dashboard/patient/checkout"), Route::PatientCheckout {});
        assert_eq!(route_for("/dashboard/admin/sync/files"), Route::AdminFiles {});
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(matches!(route_for("/dashboard/janitor"), Route::NotFound { .. }));
        assert!(matches!(route_for("/nowhere/at/all"), Route::NotFound { .. }));
    }

    #[test]
    fn titles_follow_rail_labels() {
        for role in ALL_ROLES {
            for entry in resolve_navigation(*role).into_iter().skip(1) {
                assert_eq!(page_title(&route_for(&entry.path)), entry.label);
            }
        }
        assert_eq!(page_title(&Route::DoctorDashboard {}), "Dashboard");
        assert_eq!(page_title(&Route::Settings {}), "Settings");
    }
}
