//! Static page fragments
//!
//! The control page is stitched together from these pieces with the channel
//! levels and the hostname in between. Every channel slot must come before
//! the hostname so slot offsets never depend on the hostname length.

use super::placeholders::{Placeholders, Segment};
use crate::{channel::Channel, config::WEBSOCKET_PORT};

/// Page head and the websocket setup shared by both layouts.
pub(super) const SCRIPT_HEAD: &str = r##"<html><head><script>
var effectEnable = false;
var connection = new WebSocket('ws://'+location.hostname+':81/', ['arduino']);
connection.onopen = function() { connection.send('Connect ' + new Date()); };
connection.onerror = function(error) { console.log('WebSocket Error ', error); };
connection.onmessage = function(e) { console.log('Server: ', e.data); };
function sendRGBW() {
 var r = parseInt(document.getElementById('r').value).toString(16);
 var g = parseInt(document.getElementById('g').value).toString(16);
 var b = parseInt(document.getElementById('b').value).toString(16);
"##;

/// Slider encoding and effect toggle for three-channel devices.
pub(super) const SCRIPT_RGB: &str = r##" if(r.length<2) { r='0'+r; }  if(g.length<2) { g='0'+g; }
 if(b.length<2) { b='0'+b; }
 var rgb = '#'+r+g+b; console.log('RGB: '+rgb); connection.send(rgb); }
function ledEffect () {
 effectEnable = ! effectEnable;
 if (effectEnable) {
  connection.send("Effect ON");
  document.getElementById('effect').style.backgroundColor = '#00878F';
  document.getElementById('r').className = 'disabled';
  document.getElementById('g').className = 'disabled';
  document.getElementById('b').className = 'disabled';
  document.getElementById('r').disabled = true;
  document.getElementById('g').disabled = true;
  document.getElementById('b').disabled = true;
  console.log('LED Effect ON');
 } else {
  connection.send("Normal Mode");
  document.getElementById('effect').style.backgroundColor = '#999';
  document.getElementById('r').className = 'enabled';
  document.getElementById('g').className = 'enabled';
  document.getElementById('b').className = 'enabled';
  document.getElementById('r').disabled = false;
  document.getElementById('g').disabled = false;
  document.getElementById('b').disabled = false;
  console.log('LED Effect OFF');
 }
}"##;

/// Slider encoding and effect toggle for four-channel devices.
pub(super) const SCRIPT_RGBW: &str = r##" var w = parseInt(document.getElementById('w').value).toString(16);
 if(r.length<2) { r='0'+r; }  if(g.length<2) { g='0'+g; }
 if(b.length<2) { b='0'+b; }  if(w.length<2) { w='0'+w; }
 var rgbw = '#'+w+r+g+b; console.log('RGBW: '+rgbw); connection.send(rgbw); }
function ledEffect () {
 effectEnable = ! effectEnable;
 if (effectEnable) {
  connection.send("Effect ON");
  document.getElementById('effect').style.backgroundColor = '#00878F';
  document.getElementById('r').className = 'disabled';
  document.getElementById('g').className = 'disabled';
  document.getElementById('b').className = 'disabled';
  document.getElementById('w').className = 'disabled';
  document.getElementById('r').disabled = true;
  document.getElementById('g').disabled = true;
  document.getElementById('b').disabled = true;
  document.getElementById('w').disabled = true;
  console.log('LED Effect ON');
 } else {
  connection.send("Normal Mode");
  document.getElementById('effect').style.backgroundColor = '#999';
  document.getElementById('r').className = 'enabled';
  document.getElementById('g').className = 'enabled';
  document.getElementById('b').className = 'enabled';
  document.getElementById('w').className = 'enabled';
  document.getElementById('r').disabled = false;
  document.getElementById('g').disabled = false;
  document.getElementById('b').disabled = false;
  document.getElementById('w').disabled = false;
  console.log('LED Effect OFF');
 }
}"##;

/// Closes the script and opens the red slider up to its value.
pub(super) const SLIDER_RED: &str = r##"</script></head>
<body><center><h2>LED Control:</h2>
<table><tr>
<td>R: </td><td><input id="r" type="range" min="08" max="255" step="1" value=""##;

/// Closes the previous slider and opens the green one.
pub(super) const SLIDER_GREEN: &str = r##"" oninput="sendRGBW();" /></td></tr>
<td>G: </td><td><input id="g" type="range" min="08" max="255" step="1" value=""##;

/// Closes the previous slider and opens the blue one.
pub(super) const SLIDER_BLUE: &str = r##"" oninput="sendRGBW();" /></td></tr>
<td>B: </td><td><input id="b" type="range" min="08" max="255" step="1" value=""##;

/// Closes the previous slider and opens the white one.
pub(super) const SLIDER_WHITE: &str = r##"" oninput="sendRGBW();" /></td></tr>
<td>W: </td><td><input id="w" type="range" min="08" max="255" step="1" value=""##;

/// Closes the last slider, adds the effect button and the hostname label.
pub(super) const FOOTER_HEAD: &str = r##"" oninput="sendRGBW();" /></td></tr></table><br/>
<button id="effect" class="button" style="background-color:#999" onclick="ledEffect();">Effect</button><br/><br/>
<font size="1">
Hostname: "##;

/// Closing markup after the hostname.
pub(super) const FOOTER_TAIL: &str = r##"<br/>
</center></body></html>"##;

pub(super) const RGB_SEGMENTS: &[Segment] = &[
    Segment::Text(SCRIPT_HEAD),
    Segment::Text(SCRIPT_RGB),
    Segment::Text(SLIDER_RED),
    Segment::Slot(Channel::Red),
    Segment::Text(SLIDER_GREEN),
    Segment::Slot(Channel::Green),
    Segment::Text(SLIDER_BLUE),
    Segment::Slot(Channel::Blue),
    Segment::Text(FOOTER_HEAD),
    Segment::Hostname,
    Segment::Text(FOOTER_TAIL),
];

pub(super) const RGBW_SEGMENTS: &[Segment] = &[
    Segment::Text(SCRIPT_HEAD),
    Segment::Text(SCRIPT_RGBW),
    Segment::Text(SLIDER_RED),
    Segment::Slot(Channel::Red),
    Segment::Text(SLIDER_GREEN),
    Segment::Slot(Channel::Green),
    Segment::Text(SLIDER_BLUE),
    Segment::Slot(Channel::Blue),
    Segment::Text(SLIDER_WHITE),
    Segment::Slot(Channel::White),
    Segment::Text(FOOTER_HEAD),
    Segment::Hostname,
    Segment::Text(FOOTER_TAIL),
];

pub(super) const RGB_PLACEHOLDERS: Placeholders = Placeholders::from_segments(RGB_SEGMENTS);
pub(super) const RGBW_PLACEHOLDERS: Placeholders = Placeholders::from_segments(RGBW_SEGMENTS);

const _: () = assert!(
    matches!(script_port(SCRIPT_HEAD), Some(port) if port == WEBSOCKET_PORT),
    "page script connects to a different websocket port"
);

/// Port in the first `':<port>/'` of a script.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
const fn script_port(script: &str) -> Option<u16> {
    let bytes = script.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\'' && bytes[i + 1] == b':' {
            let mut j = i + 2;
            let mut port: u32 = 0;
            while j < bytes.len() && bytes[j].is_ascii_digit() && port <= u16::MAX as u32 {
                port = port * 10 + (bytes[j] - b'0') as u32;
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'/' && j > i + 2 && port <= u16::MAX as u32 {
                return Some(port as u16);
            }
            return None;
        }
        i += 1;
    }
    None
}
