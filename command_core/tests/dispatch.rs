mod common;

use command_core::{arg, Command, CommandError, CommandSource, Outcome, SimpleCommandMap, CommandRegistry};

use common::{Calls, Kind, TestSender};

fn example_tree() -> Command {
    Command::from_fn("example", "myplugin.example", |_, _| Ok(()))
        .add_aliases(["exam", "ple"])
        .remove_permitted_sources([CommandSource::CommandBlock])
        .add_sub_commands([Command::from_fn("sub", "myplugin.example.sub", |sender, args| {
            match args.first() {
                Some(name) => sender.send_message(&format!("Hello, {}", name)),
                None => sender.send_message("Try adding your name at the end."),
            }
            Ok(())
        })
        .set_max_args(1)
        .set_usage("/example sub <yourName>")])
}

#[test]
fn sub_command_without_arguments() {
    let sender = TestSender::player(&["myplugin.example", "myplugin.example.sub"]);
    assert_eq!(example_tree().fire(&sender, &["sub"]), Outcome::Executed);
    assert_eq!(sender.messages(), ["Try adding your name at the end."]);
}

#[test]
fn sub_command_with_name() {
    let sender = TestSender::player(&["myplugin.example.sub"]);
    assert_eq!(example_tree().fire(&sender, &["sub", "Ari"]), Outcome::Executed);
    assert_eq!(sender.messages(), ["Hello, Ari"]);
}

#[test]
fn console_only_command_rejects_players() {
    let calls = Calls::default();
    let command = calls
        .command("brigadier", "")
        .remove_permitted_sources([CommandSource::Player, CommandSource::CommandBlock])
        .set_min_args(1)
        .set_max_args(1);

    let player = TestSender::player(&[]);
    assert_eq!(command.fire(&player, &["word"]), Outcome::RejectedSource);
    assert_eq!(player.messages(), ["This command cannot be executed by your account type"]);
    assert!(calls.is_empty());

    let console = TestSender::new(Kind::Console);
    assert_eq!(command.fire(&console, &["word"]), Outcome::Executed);
    assert_eq!(calls.taken(), [("brigadier".to_string(), vec!["word".to_string()])]);
}

#[test]
fn too_few_arguments_is_silent() {
    let calls = Calls::default();
    let command = calls.command("give", "").set_min_args(1).set_max_args(2);
    let sender = TestSender::player(&[]);

    assert_eq!(command.fire(&sender, &[]), Outcome::RejectedArity);
    assert!(sender.messages().is_empty());
    assert!(calls.is_empty());
}

#[test]
fn too_many_arguments_is_silent() {
    let calls = Calls::default();
    let command = calls.command("spawn", "");
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &["extra"]), Outcome::RejectedArity);
    assert!(sender.messages().is_empty());
    assert!(calls.is_empty());
}

#[test]
fn max_below_min_rejects_everything() {
    let calls = Calls::default();
    let command = calls.command("broken", "").set_min_args(2).set_max_args(1);
    let sender = TestSender::new(Kind::Console);

    for args in [&[][..], &["a"][..], &["a", "b"][..]] {
        assert_eq!(command.fire(&sender, args), Outcome::RejectedArity);
    }
    assert!(calls.is_empty());
}

#[test]
fn empty_arguments_never_reach_sub_commands() {
    let calls = Calls::default();
    let command = calls.command("root", "").add_sub_commands([calls.command("child", "")]);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &[]), Outcome::Executed);
    assert_eq!(calls.taken(), [("root".to_string(), Vec::<String>::new())]);
}

#[test]
fn unmatched_token_is_an_argument_of_the_parent() {
    let calls = Calls::default();
    let command = calls
        .command("warp", "")
        .set_max_args(1)
        .add_sub_commands([calls.command("set", "")]);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &["home"]), Outcome::Executed);
    assert_eq!(calls.taken(), [("warp".to_string(), vec!["home".to_string()])]);
}

#[test]
fn sub_command_names_match_ignoring_case() {
    let calls = Calls::default();
    let command = calls.command("warp", "").add_sub_commands([calls.command("set", "").set_max_args(1)]);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &["SET", "home"]), Outcome::Executed);
    assert_eq!(calls.taken(), [("set".to_string(), vec!["home".to_string()])]);
}

#[test]
fn aliases_do_not_route_to_sub_commands() {
    let calls = Calls::default();
    let command = calls
        .command("warp", "")
        .set_max_args(1)
        .add_sub_commands([calls.command("list", "").add_aliases(["ls"])]);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &["ls"]), Outcome::Executed);
    assert_eq!(calls.taken(), [("warp".to_string(), vec!["ls".to_string()])]);
}

#[test]
fn matched_child_never_falls_back_to_parent() {
    let calls = Calls::default();
    let command = calls
        .command("warp", "")
        .set_max_args(5)
        .add_sub_commands([calls.command("set", "")]);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &["set", "too", "many"]), Outcome::RejectedArity);
    assert!(calls.is_empty());
}

#[test]
fn only_the_resolved_node_checks_permission() {
    let calls = Calls::default();
    let command = calls
        .command("admin", "plugin.admin")
        .add_sub_commands([calls.command("info", "")]);
    let sender = TestSender::player(&[]);

    assert_eq!(command.fire(&sender, &["info"]), Outcome::Executed);
    assert_eq!(command.fire(&sender, &[]), Outcome::RejectedPermission);
    assert_eq!(sender.messages(), ["You have insufficient permissions to execute this command!"]);
}

#[test]
fn permission_only_applies_to_players() {
    let calls = Calls::default();
    let command = calls.command("stop", "server.stop");

    let console = TestSender::new(Kind::Console);
    let block = TestSender::new(Kind::Block);
    assert_eq!(command.fire(&console, &[]), Outcome::Executed);
    assert_eq!(command.fire(&block, &[]), Outcome::Executed);

    let player = TestSender::player(&["server.stop"]);
    assert_eq!(command.fire(&player, &[]), Outcome::Executed);
    assert_eq!(calls.taken().len(), 3);
}

#[test]
fn unknown_sender_is_rejected_by_source() {
    let calls = Calls::default();
    let command = calls.command("spawn", "");
    let remote = TestSender::new(Kind::Remote);

    assert_eq!(command.fire(&remote, &[]), Outcome::RejectedSource);
    assert_eq!(remote.messages(), ["This command cannot be executed by your account type"]);
    assert!(calls.is_empty());
}

#[test]
fn illegal_argument_is_reported() {
    let command = Command::from_fn("give", "", |_, args| {
        let _amount: u32 = arg(args, 0, "amount")?;
        Ok(())
    })
    .set_max_args(1);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &["lots"]), Outcome::FailedReported);
    assert_eq!(sender.messages(), ["You have specified the wrong argument type for, amount, expected a u32!"]);
}

#[test]
fn illegal_usage_reports_usage() {
    let calls = Calls::default();
    let command = calls
        .failing("warp", || CommandError::IllegalUsage)
        .add_sub_commands([calls.command("set", ""), calls.command("list", "")]);
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &[]), Outcome::FailedReported);
    assert_eq!(sender.messages(), ["Incorrect command usage, the correct usage is:\n/warp <set/list>"]);
}

#[test]
fn other_failures_stay_silent() {
    let calls = Calls::default();
    let command = calls.failing("save", || CommandError::Failed("disk full".to_string()));
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &[]), Outcome::FailedSilently);
    assert!(sender.messages().is_empty());
    assert_eq!(calls.taken().len(), 1);
}

#[test]
fn panicking_handler_is_contained() {
    let command = Command::from_fn("crash", "", |_, _| panic!("boom"));
    let sender = TestSender::new(Kind::Console);

    assert_eq!(command.fire(&sender, &[]), Outcome::FailedSilently);
    assert!(sender.messages().is_empty());
}

#[test]
fn host_dispatch_through_registry() {
    let mut registry = CommandRegistry::new(SimpleCommandMap::new());
    registry.register_command_for("myplugin", example_tree());

    let sender = TestSender::player(&["myplugin.example.sub"]);
    let map = registry.command_map();

    assert_eq!(map.dispatch(&sender, "/exam sub Ari"), Some(Outcome::Executed));
    assert_eq!(map.dispatch(&sender, "myplugin:example SUB"), Some(Outcome::Executed));
    assert_eq!(map.dispatch(&sender, "/nothing"), None);
    assert_eq!(map.dispatch(&sender, "   "), None);
    assert_eq!(sender.messages(), ["Hello, Ari", "Try adding your name at the end."]);
}
