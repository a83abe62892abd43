use log_facade::Attr;

#[test]
fn logging_before_configuration_is_a_no_op() {
    assert!(log_facade::global().is_none());

    log_facade::debug("debug", &[Attr::new("key", &"value")]);
    log_facade::info("info", &[]);
    log_facade::warn("warn", &[]);
    log_facade::error("error", &[]);
    log_facade::debugf(format_args!("debug {}", 1));
    log_facade::infof(format_args!("info {}", 2));
    log_facade::warnf(format_args!("warn {}", 3));
    log_facade::errorf(format_args!("error {}", 4));

    log_facade::debug!("debug", "key" => 1);
    log_facade::info!("info");
    log_facade::warn!("warn", "a" => 'a', "b" => true,);
    log_facade::error!("error");
    log_facade::debugf!("debug {}", 1);
    log_facade::infof!("info");
    log_facade::warnf!("warn {:?}", Some(3));
    log_facade::errorf!("error {}", "four");

    assert!(log_facade::global().is_none());
}
