use std::rc::Rc;

use settree::{
    MemoryStorage, OptionItem, OptionsButton, OptionsSection, Screen, ScreenSection, Section,
    SettingsEntry, SettingsRoot, Slider, Switch, TextField, shared,
};

/// Deeply nested tree touching every node kind:
/// Screen -> Section -> Screen -> Section -> OptionsButton -> Option.
fn deep_screen() -> Screen {
    Screen::build("Intelligent Home", || {
        vec![
            Section::build("Electricity", || {
                vec![
                    OptionsButton::build("tariff", "Tariff", || {
                        vec![
                            OptionItem::new("Day", 1),
                            OptionItem::new("Night", 2),
                            OptionItem::new("Mixed", 3),
                        ]
                    })
                    .into(),
                    Switch::new("light-central", "Central Switch", false).into(),
                    Screen::build("Livingroom", || {
                        vec![
                            Section::build("Lights", || {
                                vec![
                                    Switch::new("light1", "Light 1", false).into(),
                                    Slider::new("brightness-1", "Brightness", 0.0)
                                        .with_range(0.0, 100.0)
                                        .into(),
                                    Screen::build("Advanced", || {
                                        vec![
                                            Section::build("Tuning", || {
                                                vec![
                                                    OptionsButton::build("mode", "Mode", || {
                                                        vec![
                                                            OptionItem::new("Eco", 1),
                                                            OptionItem::new("Comfort", 2),
                                                        ]
                                                    })
                                                    .into(),
                                                ]
                                            })
                                            .into(),
                                        ]
                                    })
                                    .into(),
                                ]
                            })
                            .into(),
                        ]
                    })
                    .into(),
                ]
            })
            .into(),
            OptionsSection::build("alarm-status", "Alarm", || {
                vec![
                    OptionItem::new("Armed", 1),
                    OptionItem::new("Disarmed", 2),
                ]
            })
            .into(),
            Section::build("Administrator", || {
                vec![TextField::new("password", "Password", "").secure().into()]
            })
            .into(),
        ]
    })
}

fn assert_all_bound(screen: &Screen) {
    for section in &screen.sections {
        match section {
            ScreenSection::Section(section) => {
                for entry in &section.items {
                    match entry {
                        SettingsEntry::Switch(item) => assert!(item.is_bound()),
                        SettingsEntry::Slider(slider) => assert!(slider.item.is_bound()),
                        SettingsEntry::TextField(field) => assert!(field.item.is_bound()),
                        SettingsEntry::OptionsButton(button) => {
                            assert!(button.options.iter().all(|o| o.is_bound()));
                        }
                        SettingsEntry::Screen(nested) => assert_all_bound(nested),
                    }
                }
            }
            ScreenSection::Options(options) => {
                assert!(options.options.iter().all(|o| o.is_bound()));
            }
        }
    }
}

#[test]
fn test_binding_is_exhaustive() {
    let settings = SettingsRoot::from_screen(shared(MemoryStorage::new()), deep_screen());
    assert_all_bound(&settings.main);
}

#[test]
fn test_binding_count_matches_leaves() {
    let mut settings = SettingsRoot::from_screen(shared(MemoryStorage::new()), deep_screen());
    // 3 tariff options + central switch + light1 + brightness + 2 mode
    // options + 2 alarm options + password
    assert_eq!(settings.rebind(), 11);
}

#[test]
fn test_binding_is_idempotent() {
    let mut settings = SettingsRoot::from_screen(shared(MemoryStorage::new()), deep_screen());
    let first = settings.rebind();
    let second = settings.rebind();
    assert_eq!(first, second);
    assert_all_bound(&settings.main);
}

#[test]
fn test_deeply_nested_leaf_writes_through() {
    let storage = shared(MemoryStorage::new());
    let mut settings = SettingsRoot::from_screen(Rc::clone(&storage), deep_screen());

    let electricity = settings.main.sections[0].as_section_mut().unwrap();
    let livingroom = electricity.items[2].as_screen_mut().unwrap();
    let lights = livingroom.sections[0].as_section_mut().unwrap();
    let advanced = lights.items[2].as_screen_mut().unwrap();
    let tuning = advanced.sections[0].as_section_mut().unwrap();
    let mode = tuning.items[0].as_options_button_mut().unwrap();

    mode.options[1].select();
    assert_eq!(storage.borrow().get_int("mode"), Some(2));
}

#[test]
fn test_swapping_main_does_not_rebind() {
    let storage = shared(MemoryStorage::new());
    let mut settings = SettingsRoot::from_screen(Rc::clone(&storage), deep_screen());

    settings.main = Screen::build("Replacement", || {
        vec![
            Section::build("Section", || {
                vec![Switch::new("fresh", "Fresh", false).into()]
            })
            .into(),
        ]
    });

    // the replacement tree is unbound: the write is accepted but lost
    let section = settings.main.sections[0].as_section_mut().unwrap();
    let switch = section.items[0].as_switch_mut().unwrap();
    assert!(!switch.is_bound());
    switch.set_value(true);
    assert_eq!(storage.borrow().get_bool("fresh"), None);

    // manual rebinding restores write-through
    settings.rebind();
    let section = settings.main.sections[0].as_section_mut().unwrap();
    section.items[0].as_switch_mut().unwrap().set_value(true);
    assert_eq!(storage.borrow().get_bool("fresh"), Some(true));
}

#[test]
fn test_append_after_construction_stays_unbound_until_rebind() {
    let storage = shared(MemoryStorage::new());
    let mut settings = SettingsRoot::build(Rc::clone(&storage), "Home", || {
        vec![Section::new("Empty").into()]
    });

    let section = settings.main.sections[0].as_section_mut().unwrap();
    section
        .items
        .push(Switch::new("late", "Late addition", false).into());

    let switch = settings.main.sections[0]
        .as_section_mut()
        .unwrap()
        .items[0]
        .as_switch_mut()
        .unwrap();
    assert!(!switch.is_bound());

    settings.rebind();
    let switch = settings.main.sections[0]
        .as_section_mut()
        .unwrap()
        .items[0]
        .as_switch_mut()
        .unwrap();
    assert!(switch.is_bound());
}

#[test]
fn test_authoring_styles_produce_equivalent_trees() {
    // top-down, nested closures
    let top_down_storage = shared(MemoryStorage::new());
    let top_down = SettingsRoot::build(Rc::clone(&top_down_storage), "Intelligent Home", || {
        vec![
            Section::build("Electricity", || {
                vec![
                    OptionsButton::build("tariff", "Tariff", || {
                        vec![OptionItem::new("Day", 1), OptionItem::new("Night", 2)]
                    })
                    .into(),
                    Switch::new("light-central", "Central Switch", false).into(),
                ]
            })
            .into(),
            OptionsSection::build("alarm-status", "Alarm", || {
                vec![OptionItem::new("Armed", 1), OptionItem::new("Disarmed", 2)]
            })
            .into(),
        ]
    });

    // bottom-up, incremental composition
    let tariff = OptionsButton::new("tariff", "Tariff")
        .with(OptionItem::new("Day", 1))
        .with(OptionItem::new("Night", 2));
    let electricity = Section::new("Electricity")
        .with(tariff)
        .with(Switch::new("light-central", "Central Switch", false));
    let alarm = OptionsSection::new("alarm-status", "Alarm")
        .with(OptionItem::new("Armed", 1))
        .with(OptionItem::new("Disarmed", 2));
    let main = Screen::new("Intelligent Home")
        .include(electricity)
        .include(alarm);

    let bottom_up_storage = shared(MemoryStorage::new());
    let bottom_up = SettingsRoot::from_screen(Rc::clone(&bottom_up_storage), main);

    for (mut settings, storage) in [
        (top_down, top_down_storage),
        (bottom_up, bottom_up_storage),
    ] {
        assert_eq!(settings.main.title, "Intelligent Home");
        assert_eq!(settings.main.sections.len(), 2);
        assert_eq!(settings.rebind(), 5);

        let electricity = settings.main.sections[0].as_section_mut().unwrap();
        let button = electricity.items[0].as_options_button_mut().unwrap();
        assert!(button.options.iter().all(|o| o.navigate_back));
        button.options[1].select();
        electricity.items[1].as_switch_mut().unwrap().set_value(true);

        let alarm = settings.main.sections[1].as_options_mut().unwrap();
        assert!(alarm.options.iter().all(|o| !o.navigate_back));
        alarm.options[0].select();

        assert_eq!(storage.borrow().get_int("tariff"), Some(2));
        assert_eq!(storage.borrow().get_bool("light-central"), Some(true));
        assert_eq!(storage.borrow().get_int("alarm-status"), Some(1));
    }
}
