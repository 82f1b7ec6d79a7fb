//! Behaviour tests for login, tab navigation, the bio screen and logout.
//!
//! Scenarios drive the navigation controller through its public event API
//! and inspect the frames it produces.

use std::cell::RefCell;

use login_flow::domain::navigation::{Frame, ScreenView};
use login_flow::outbound::{NoopActivityLog, StaticUserRepository};
use login_flow::{ActiveScreen, Field, FlowEvent, NavigationController, Tab};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct LoginFlowWorld {
    controller: RefCell<NavigationController<NoopActivityLog>>,
}

impl LoginFlowWorld {
    fn new() -> Self {
        Self {
            controller: RefCell::new(fresh_controller(true)),
        }
    }

    fn restart(&self, reminders_enabled: bool) {
        *self.controller.borrow_mut() = fresh_controller(reminders_enabled);
    }

    fn dispatch(&self, event: FlowEvent) {
        self.controller.borrow_mut().dispatch(event);
    }

    fn frame(&self) -> Frame {
        self.controller.borrow().render()
    }

    fn active_screen(&self) -> ActiveScreen {
        self.controller.borrow().active_screen()
    }
}

fn fresh_controller(reminders_enabled: bool) -> NavigationController<NoopActivityLog> {
    NavigationController::from_repository(&StaticUserRepository, NoopActivityLog)
        .expect("static repository should load")
        .with_reminders(reminders_enabled)
}

#[fixture]
fn world() -> LoginFlowWorld {
    LoginFlowWorld::new()
}

#[given("the login screen is showing")]
fn the_login_screen_is_showing(world: &LoginFlowWorld) {
    world.restart(true);
}

#[given("the login screen is showing with reminders disabled")]
fn the_login_screen_is_showing_with_reminders_disabled(world: &LoginFlowWorld) {
    world.restart(false);
}

#[given("the user is logged in")]
fn the_user_is_logged_in(world: &LoginFlowWorld) {
    world.restart(true);
    world.dispatch(FlowEvent::SubmitCredentials {
        login: "Matvei".to_owned(),
        password: "password".to_owned(),
    });
    assert_eq!(world.active_screen(), ActiveScreen::Welcome);
}

#[when("the user submits login \"{login}\" and password \"{password}\"")]
fn the_user_submits_credentials(world: &LoginFlowWorld, login: String, password: String) {
    world.dispatch(FlowEvent::SubmitCredentials { login, password });
}

#[when("the user dismisses the alert")]
fn the_user_dismisses_the_alert(world: &LoginFlowWorld) {
    world.dispatch(FlowEvent::DismissAlert);
}

#[when("the user asks for a password reminder")]
fn the_user_asks_for_a_password_reminder(world: &LoginFlowWorld) {
    world.dispatch(FlowEvent::RequestReminder(Field::Password));
}

#[when("the user selects the profile tab")]
fn the_user_selects_the_profile_tab(world: &LoginFlowWorld) {
    world.dispatch(FlowEvent::SelectTab(Tab::Profile));
}

#[when("the user opens the bio")]
fn the_user_opens_the_bio(world: &LoginFlowWorld) {
    world.dispatch(FlowEvent::OpenBio);
}

#[when("the user goes back")]
fn the_user_goes_back(world: &LoginFlowWorld) {
    world.dispatch(FlowEvent::Back);
}

#[when("the user logs out")]
fn the_user_logs_out(world: &LoginFlowWorld) {
    world.dispatch(FlowEvent::Logout);
}

#[then("the welcome tab is active")]
fn the_welcome_tab_is_active(world: &LoginFlowWorld) {
    assert_eq!(world.active_screen(), ActiveScreen::Welcome);
}

#[then("the profile tab is active")]
fn the_profile_tab_is_active(world: &LoginFlowWorld) {
    assert_eq!(world.active_screen(), ActiveScreen::Profile);
}

#[then("the bio screen is active")]
fn the_bio_screen_is_active(world: &LoginFlowWorld) {
    assert_eq!(world.active_screen(), ActiveScreen::Bio);
}

#[then("the login screen is still active")]
fn the_login_screen_is_still_active(world: &LoginFlowWorld) {
    assert_eq!(world.active_screen(), ActiveScreen::Login);
}

#[then("the greeting reads \"{greeting}\"")]
fn the_greeting_reads(world: &LoginFlowWorld, greeting: String) {
    match world.frame().screen {
        ScreenView::Welcome(model) => assert_eq!(model.greeting, greeting),
        other => panic!("expected the welcome screen, got {other:?}"),
    }
}

#[then("the screen title reads \"{title}\"")]
fn the_screen_title_reads(world: &LoginFlowWorld, title: String) {
    match world.frame().screen {
        ScreenView::Bio(model) => assert_eq!(model.title, title),
        ScreenView::Profile(model) => assert_eq!(model.title, title),
        other => panic!("expected a titled screen, got {other:?}"),
    }
}

#[then("the login form is empty")]
fn the_login_form_is_empty(world: &LoginFlowWorld) {
    let controller = world.controller.borrow();
    assert_eq!(controller.login_form().login(), "");
    assert_eq!(controller.login_form().password(), "");
}

#[then("the password field is empty")]
fn the_password_field_is_empty(world: &LoginFlowWorld) {
    assert_eq!(world.controller.borrow().login_form().password(), "");
}

#[then("the alert titled \"{title}\" is showing")]
fn the_alert_titled_is_showing(world: &LoginFlowWorld, title: String) {
    let frame = world.frame();
    let alert = frame.alert.expect("an alert should be showing");
    assert_eq!(alert.title(), title);
}

#[then("the alert message reads \"{message}\"")]
fn the_alert_message_reads(world: &LoginFlowWorld, message: String) {
    let frame = world.frame();
    let alert = frame.alert.expect("an alert should be showing");
    assert_eq!(alert.message(), message);
}

#[then("no alert is showing")]
fn no_alert_is_showing(world: &LoginFlowWorld) {
    assert!(world.frame().alert.is_none());
}

#[then("no tab bar is shown")]
fn no_tab_bar_is_shown(world: &LoginFlowWorld) {
    assert!(world.frame().tab_bar.is_none());
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Valid credentials open the welcome tab"
)]
fn valid_credentials_open_the_welcome_tab(world: LoginFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Wrong password raises the invalid credentials alert"
)]
fn wrong_password_raises_the_invalid_credentials_alert(world: LoginFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Reminders reveal the stored credentials"
)]
fn reminders_reveal_the_stored_credentials(world: LoginFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Disabled reminders do nothing"
)]
fn disabled_reminders_do_nothing(world: LoginFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Bio opens from the profile and back returns"
)]
fn bio_opens_from_the_profile_and_back_returns(world: LoginFlowWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Logout from the bio returns to a clean login screen"
)]
fn logout_from_the_bio_returns_to_a_clean_login_screen(world: LoginFlowWorld) {
    drop(world);
}
