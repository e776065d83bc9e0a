//! Integration tests for control page messages.

use myrtio_light_page::{ChannelLayout, ChannelValue, Command, Error};

fn rgb(text: &str) -> Result<Command, Error> {
    Command::parse(text, ChannelLayout::Rgb)
}

fn rgbw(text: &str) -> Result<Command, Error> {
    Command::parse(text, ChannelLayout::Rgbw)
}

// -----------------------------------------------------------------------------
// Colors
// -----------------------------------------------------------------------------

#[test]
fn parses_rgb_color() {
    let expected = ChannelValue::new(0x40_50_60);
    assert_eq!(rgb("#405060"), Ok(Command::SetChannels(expected)));
}

#[test]
fn parses_rgbw_color_white_first() {
    let expected = ChannelValue::from_rgbw(0x10, 0x20, 0x30, 0xFF);
    assert_eq!(rgbw("#ff102030"), Ok(Command::SetChannels(expected)));
}

#[test]
fn hex_is_case_insensitive() {
    assert_eq!(rgb("#AbCdEf"), rgb("#abcdef"));
}

#[test]
fn color_length_must_match_layout() {
    assert_eq!(rgbw("#102030"), Err(Error::InvalidLength));
    assert_eq!(rgb("#ff102030"), Err(Error::InvalidLength));
    assert_eq!(rgb("#"), Err(Error::InvalidLength));
}

#[test]
fn rejects_non_hex_digits() {
    assert_eq!(rgb("#10203g"), Err(Error::InvalidHex));
    assert_eq!(rgb("#+10203"), Err(Error::InvalidHex));
}

// -----------------------------------------------------------------------------
// Text messages
// -----------------------------------------------------------------------------

#[test]
fn parses_effect_toggle() {
    for parse in [rgb, rgbw] {
        assert_eq!(parse("Effect ON"), Ok(Command::EffectOn));
        assert_eq!(parse("Normal Mode"), Ok(Command::NormalMode));
    }
}

#[test]
fn parses_connect_greeting() {
    let greeting = "Connect Mon Oct 19 2026 10:00:00 GMT+0000";
    assert_eq!(rgb(greeting), Ok(Command::Connect));
    assert_eq!(rgb("Connect"), Ok(Command::Connect));
}

#[test]
fn connect_must_be_a_whole_word() {
    assert_eq!(rgb("Connectivity lost"), Err(Error::UnknownCommand));
    assert_eq!(rgb("ConnectX"), Err(Error::UnknownCommand));
    assert_eq!(rgbw("Connect_"), Err(Error::UnknownCommand));
}

#[test]
fn rejects_unknown_text() {
    assert_eq!(rgb("effect on"), Err(Error::UnknownCommand));
    assert_eq!(rgb(""), Err(Error::UnknownCommand));
}
