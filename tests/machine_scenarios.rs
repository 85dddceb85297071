use pretty_assertions::assert_eq;
use rewind::{
    event_enum, state_enum, ConfigError, MachineBuilder, MachineConfig, MachineError,
    Operation, RedoPolicy, StateBuilder, StateMachine,
};

const LIGHT_SWITCH: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "turnOn": "on" } },
        "on": { "transitions": { "turnOff": "off" } }
    }
}"#;

const EDITOR_YAML: &str = "
initial: normal
states:
  normal:
    transitions:
      i: insert
      v: visual
      ':': command
  insert:
    transitions:
      esc: normal
  visual:
    transitions:
      esc: normal
      i: insert
  command:
    transitions:
      enter: normal
      esc: normal
";

fn s(name: &str) -> String {
    name.to_string()
}

fn path_of(machine: &StateMachine) -> Vec<String> {
    machine.history().get_path().into_iter().cloned().collect()
}

#[test]
fn test_light_switch_scenario() {
    let mut machine: StateMachine = StateMachine::from_json(LIGHT_SWITCH).unwrap();

    assert_eq!(machine.trigger(&s("turnOn")).unwrap(), "on");
    assert!(machine.undo());
    assert_eq!(machine.state(), "off");
    assert!(machine.redo());
    assert_eq!(machine.state(), "on");
    assert_eq!(machine.states_with_event(&s("turnOn")), vec![&s("off")]);
}

#[test]
fn test_editor_modes_from_yaml() {
    let mut machine: StateMachine = StateMachine::from_yaml(EDITOR_YAML).unwrap();

    assert_eq!(
        machine.states(),
        vec![&s("normal"), &s("insert"), &s("visual"), &s("command")]
    );
    assert_eq!(
        machine.states_with_event(&s("esc")),
        vec![&s("insert"), &s("visual"), &s("command")]
    );
    assert_eq!(
        machine.states_with_event(&s("i")),
        vec![&s("normal"), &s("visual")]
    );

    machine.trigger(&s("v")).unwrap();
    machine.trigger(&s("i")).unwrap();
    machine.trigger(&s("esc")).unwrap();
    machine.trigger(&s(":")).unwrap();

    assert_eq!(
        path_of(&machine),
        vec![s("normal"), s("visual"), s("insert"), s("normal"), s("command")]
    );

    assert!(machine.undo());
    assert!(machine.undo());
    assert_eq!(machine.state(), "insert");
    assert!(machine.can_redo());

    assert!(machine.redo());
    assert_eq!(machine.state(), "normal");

    machine.trigger(&s("i")).unwrap();
    assert!(!machine.can_redo());
    assert!(machine.history().redo_buffer().is_empty());
}

#[test]
fn test_machine_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.yaml");
    std::fs::write(&path, EDITOR_YAML).unwrap();

    let config: MachineConfig = MachineConfig::load(&path).unwrap();
    let machine = StateMachine::new(config).unwrap();

    assert_eq!(machine.state(), "normal");
    assert_eq!(machine.states().len(), 4);
}

#[test]
fn test_missing_and_invalid_configs() {
    assert!(matches!(
        StateMachine::<String, String>::from_json(""),
        Err(MachineError::ConfigMissing)
    ));
    assert!(matches!(
        StateMachine::<String, String>::from_yaml("~"),
        Err(MachineError::ConfigMissing)
    ));
    assert!(matches!(
        StateMachine::<String, String>::from_json("[1, 2]"),
        Err(MachineError::Config(ConfigError::Json(_)))
    ));

    let error = StateMachine::<String, String>::from_json(
        r#"{
            "initial": "off",
            "states": {
                "off": { "transitions": { "turnOn": "on" } }
            }
        }"#,
    )
    .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Invalid configuration: Transition 'turnOn' in state 'off' targets undeclared state 'on'"
    );
}

#[test]
fn test_misspelled_config_keys_fail_construction() {
    let typo_in_state = r#"{
        "initial": "off",
        "states": {
            "off": { "transitons": { "turnOn": "on" } },
            "on": { "transitions": { "turnOff": "off" } }
        }
    }"#;
    let error = StateMachine::<String, String>::from_json(typo_in_state).unwrap_err();
    assert!(matches!(error, MachineError::Config(ConfigError::Json(_))));
    assert!(error.to_string().contains("transitons"), "{error}");

    let camel_case_policy = r#"{
        "initial": "off",
        "states": { "off": {} },
        "redoPolicy": "preserve"
    }"#;
    let error = StateMachine::<String, String>::from_json(camel_case_policy).unwrap_err();
    assert!(error.to_string().contains("redoPolicy"), "{error}");
}

#[test]
fn test_visit_timestamps_track_elapsed_time() {
    let mut machine: StateMachine = StateMachine::from_json(LIGHT_SWITCH).unwrap();
    assert_eq!(machine.history().duration(), std::time::Duration::ZERO);

    machine.trigger(&s("turnOn")).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(20));
    machine.trigger(&s("turnOff")).unwrap();

    let stamps: Vec<_> = machine.history().visits().map(|visit| visit.timestamp).collect();
    assert_eq!(stamps.len(), 3);
    assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));

    let elapsed = machine.history().duration();
    assert!(elapsed >= std::time::Duration::from_millis(20), "{elapsed:?}");
    assert_eq!(elapsed, (stamps[2] - stamps[0]).to_std().unwrap());

    // Undo drops the newest visit, so the span shrinks back
    machine.undo();
    machine.undo();
    assert_eq!(machine.history().duration(), std::time::Duration::ZERO);
}

#[test]
fn test_errors_leave_machine_untouched() {
    let mut machine: StateMachine = StateMachine::from_json(LIGHT_SWITCH).unwrap();
    machine.trigger(&s("turnOn")).unwrap();
    machine.undo();

    assert!(matches!(
        machine.change_state(s("dimmed")),
        Err(MachineError::UnknownState { .. })
    ));
    assert!(matches!(
        machine.trigger(&s("turnOff")),
        Err(MachineError::NoSuchTransition { .. })
    ));

    // Redo is still available because nothing was committed
    assert_eq!(machine.last_operation(), Operation::Undo);
    assert!(machine.redo());
    assert_eq!(machine.state(), "on");
}

#[test]
fn test_reset_and_clear_history_agree() {
    let mut reset: StateMachine = StateMachine::from_json(LIGHT_SWITCH).unwrap();
    let mut cleared = reset.clone();

    for machine in [&mut reset, &mut cleared] {
        machine.trigger(&s("turnOn")).unwrap();
        machine.trigger(&s("turnOff")).unwrap();
        machine.undo();
    }

    assert_eq!(reset.reset(), "off");
    cleared.clear_history();

    assert_eq!(path_of(&reset), path_of(&cleared));
    assert_eq!(reset.last_operation(), cleared.last_operation());
    assert!(!reset.undo());
    assert!(!cleared.undo());
    assert!(!reset.redo());
    assert!(!cleared.redo());
}

#[test]
fn test_change_state_redo_under_both_policies() {
    for (policy, expected_redo) in [
        (RedoPolicy::ClearOnForward, vec![s("on")]),
        (RedoPolicy::Preserve, vec![s("off"), s("on")]),
    ] {
        let mut machine = MachineBuilder::<String, String>::new()
            .initial("off")
            .state(StateBuilder::new("off").on("turnOn", "on"))
            .state(StateBuilder::new("on").on("turnOff", "off"))
            .redo_policy(policy)
            .build()
            .unwrap();

        // off -> on -> off, undo back to on, then jump to on directly
        machine.trigger(&s("turnOn")).unwrap();
        machine.trigger(&s("turnOff")).unwrap();
        machine.undo();
        machine.change_state(s("on")).unwrap();
        assert!(!machine.redo());

        machine.undo();
        assert_eq!(machine.history().redo_buffer(), expected_redo.as_slice());
    }
}

state_enum! {
    enum Order {
        Placed,
        Paid,
        Shipped,
        Cancelled,
    }
}

event_enum! {
    enum OrderEvent {
        Pay,
        Ship,
        Cancel,
    }
}

#[test]
fn test_typed_identifiers() {
    let mut machine = MachineBuilder::<Order, OrderEvent>::new()
        .initial(Order::Placed)
        .state(
            StateBuilder::new(Order::Placed)
                .on(OrderEvent::Pay, Order::Paid)
                .on(OrderEvent::Cancel, Order::Cancelled),
        )
        .state(
            StateBuilder::new(Order::Paid)
                .on(OrderEvent::Ship, Order::Shipped)
                .on(OrderEvent::Cancel, Order::Cancelled),
        )
        .state(StateBuilder::new(Order::Shipped))
        .state(StateBuilder::new(Order::Cancelled))
        .build()
        .unwrap();

    assert_eq!(
        machine.states_with_event(&OrderEvent::Cancel),
        vec![&Order::Placed, &Order::Paid]
    );

    machine.trigger(&OrderEvent::Pay).unwrap();
    machine.trigger(&OrderEvent::Ship).unwrap();

    match machine.trigger(&OrderEvent::Cancel) {
        Err(MachineError::NoSuchTransition { state, event }) => {
            assert_eq!(state, "Shipped");
            assert_eq!(event, "Cancel");
        }
        other => panic!("Expected NoSuchTransition, got {other:?}"),
    }

    assert!(machine.undo());
    assert_eq!(machine.state(), &Order::Paid);
    assert_eq!(machine.trigger(&OrderEvent::Cancel).unwrap(), &Order::Cancelled);
    assert!(!machine.redo());
}
