use notelog_lib::{Category, Message, MessageLog, Newline};

#[test]
pub fn test_end_to_end_render() {
    let mut log = MessageLog::with_newline("APP", Newline::Lf);
    log.add_info(["started"]);
    log.add_error(["disk full"]);
    log.add_success(["recovered"]);

    assert_eq!(
        log.render(),
        "INF[APP]: started\nERR[APP]: disk full\nSUC[APP]: recovered\n"
    );
    assert_eq!(log.prevailing(), Category::Plain);
}

#[test]
pub fn test_text_is_trimmed_once() {
    let mut log = MessageLog::with_newline("X", Newline::Lf);
    log.add_info(["  hello  "]);

    assert_eq!(log.notes()[0].render(), "INF[X]: hello");
    assert_eq!(log.notes()[0].text(), "hello");
}

#[test]
pub fn test_plain_ignores_prefix() {
    let mut log = MessageLog::with_newline("IGNORED", Newline::Lf);
    log.add_plain(["\tjust text \n"]);

    assert_eq!(log.render(), "just text\n");
}

#[test]
pub fn test_empty_messages_are_kept() {
    let mut log = MessageLog::with_newline("E", Newline::Lf);
    log.add_warning(["", "   "]);

    assert_eq!(log.len(), 2);
    assert!(log.notes().iter().all(|n| n.text().is_empty()));
    assert_eq!(log.render(), "WRN[E]: \nWRN[E]: \n");
}

#[test]
pub fn test_order_across_add_and_append() {
    let mut log = MessageLog::with_newline("A", Newline::Lf);
    log.add_info(["one", "two"]);
    log.append([
        Message::new(Category::Error, "B", "three"),
        Message::new(Category::Plain, "", "four"),
    ]);
    log.add_success(["five"]);

    let texts = log.iter().map(Message::text).collect::<Vec<_>>();
    assert_eq!(texts, ["one", "two", "three", "four", "five"]);
}

#[test]
pub fn test_has_predicates() {
    let mut log = MessageLog::with_newline("P", Newline::Lf);
    assert!(!log.has_infos());
    assert!(!log.has_warnings());
    assert!(!log.has_errors());
    assert!(!log.has_successes());

    log.add_warning(["careful"]);
    assert!(log.has_warnings());
    assert!(!log.has_errors());

    log.add_plain(["noise"]);
    log.append([Message::new(Category::Fatal, "P", "fatal")]);
    assert!(!log.has_errors());
    assert!(!log.has_infos());

    log.add_error(["broken"]);
    assert!(log.has_errors());
}

#[test]
pub fn test_clear_keeps_prefix_and_newline() {
    let mut log = MessageLog::with_newline("KEEP", Newline::CrLf);
    log.add_info(["a"]);
    log.add_warning(["b"]);
    log.add_error(["c"]);
    log.add_success(["d"]);
    log.clear();

    assert!(log.is_empty());
    assert_eq!(log.render(), "");
    assert!(!log.has_infos());
    assert!(!log.has_warnings());
    assert!(!log.has_errors());
    assert!(!log.has_successes());

    log.add_info(["again"]);
    assert_eq!(log.default_prefix(), "KEEP");
    assert_eq!(log.render(), "INF[KEEP]: again\r\n");
}

#[test]
pub fn test_merge_preserves_source_prefix() {
    let mut worker = MessageLog::with_newline("worker", Newline::Lf);
    worker.add_error(["failed"]);
    worker.add_plain(["raw"]);

    let mut main = MessageLog::with_newline("main", Newline::Lf);
    main.add_info(["begin"]);
    main.merge(worker);

    assert_eq!(main.render(), "INF[main]: begin\nERR[worker]: failed\nraw\n");
    assert_eq!(main.notes()[1].prefix(), "worker");
    assert_eq!(main.notes()[1].category(), Category::Error);
}

#[test]
pub fn test_append_copies_from_another_log() {
    let mut a = MessageLog::with_newline("a", Newline::Lf);
    a.add_success(["done"]);

    let mut b = MessageLog::with_newline("b", Newline::Lf);
    b.append(a.notes().iter().cloned());
    b.extend(a.notes().to_vec());

    assert_eq!(a.len(), 1);
    assert_eq!(b.render(), "SUC[a]: done\nSUC[a]: done\n");
}

#[test]
pub fn test_render_is_repeatable() {
    let mut log = MessageLog::with_newline("R", Newline::Lf);
    log.add_info(["x"]);
    let first = log.render();

    assert_eq!(first, log.render());
    assert_eq!(first, log.to_string());

    log.add_info(["y"]);
    assert_eq!(log.render(), "INF[R]: x\nINF[R]: y\n");
}

#[test]
pub fn test_prevailing_after_appends() {
    let mut log = MessageLog::with_newline("D", Newline::Lf);
    log.add_info(["a", "b", "c"]);
    log.add_warning(["d"]);
    assert_eq!(log.prevailing(), Category::Info);

    log.add_warning(["e", "f"]);
    assert_eq!(log.prevailing(), Category::Plain);

    log.add_warning(["g"]);
    assert_eq!(log.prevailing(), Category::Warning);
}
