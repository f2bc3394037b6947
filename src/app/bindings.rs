use std::collections::HashMap;

use cosmic::iced::keyboard::Key;
use cosmic::widget::menu::key_bind::{KeyBind, Modifier};

use super::action::Action;
use crate::core::route::Route;

pub fn key_binds() -> HashMap<KeyBind, Action> {
    let mut key_binds = HashMap::new();

    macro_rules! bind {
        ([$($modifier:ident),* $(,)?], $key:expr, $action:expr) => {{
            key_binds.insert(
                KeyBind {
                    modifiers: vec![$(Modifier::$modifier),*],
                    key: $key,
                },
                $action,
            );
        }};
    }

    bind!([Ctrl], Key::Character(",".into()), Action::Settings);
    bind!([Ctrl], Key::Character("1".into()), Action::Navigate(Route::Sales));
    bind!([Ctrl], Key::Character("2".into()), Action::Navigate(Route::Inventory));
    bind!([Ctrl], Key::Character("3".into()), Action::Navigate(Route::Insights));

    key_binds
}
