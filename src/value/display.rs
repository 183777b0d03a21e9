use std::fmt::{self, Display, Formatter};

use super::{NamedTag, Value};
use crate::Tag;

// Renders the tree one tag per line, XML style, indenting with a tab per
// level:
//
//     <root type="compound tag">
//         <hp type="Short" value="100"/>
//     </root>
//
// Open containers live on a heap stack rather than the call stack, so any
// tree that can be built can be printed.
impl Display for NamedTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        write_open(f, &mut stack, self.name(), self.value())?;

        while let Some(mut frame) = stack.pop() {
            let child = match &mut frame.children {
                Children::Compound(children) => children.next().map(|(n, v)| (n.as_str(), v)),
                Children::List(items) => items.next().map(|v| ("", v)),
            };

            match child {
                Some((name, value)) => {
                    stack.push(frame);
                    write_open(f, &mut stack, name, value)?;
                }
                None => {
                    write_indent(f, stack.len())?;
                    writeln!(f, "</{}>", frame.name)?;
                }
            }
        }
        Ok(())
    }
}

struct Frame<'a> {
    name: &'a str,
    children: Children<'a>,
}

enum Children<'a> {
    Compound(indexmap::map::Iter<'a, String, Value>),
    List(std::slice::Iter<'a, Value>),
}

/// Write the line for `value`. Lists and compounds are left open on the
/// stack, to be closed once their children are written.
fn write_open<'a>(
    f: &mut Formatter<'_>,
    stack: &mut Vec<Frame<'a>>,
    name: &'a str,
    value: &'a Value,
) -> fmt::Result {
    let name = if name.is_empty() { "TAG" } else { name };
    write_indent(f, stack.len())?;
    write!(f, "<{}", name)?;

    match value {
        Value::List(list) => {
            if list.element_tag() == Tag::End {
                writeln!(f, " type=\"list\">")?;
            } else {
                writeln!(f, " type=\"list:{}\">", list.element_tag())?;
            }
            stack.push(Frame {
                name,
                children: Children::List(list.iter()),
            });
            Ok(())
        }
        Value::Compound(compound) => {
            writeln!(f, " type=\"compound tag\">")?;
            stack.push(Frame {
                name,
                children: Children::Compound(compound.entries()),
            });
            Ok(())
        }
        Value::ByteArray(bytes) => writeln!(f, " type=\"byte[{}]\"/>", bytes.len()),
        Value::Byte(v) => write_scalar(f, value, v),
        Value::Short(v) => write_scalar(f, value, v),
        Value::Int(v) => write_scalar(f, value, v),
        Value::Long(v) => write_scalar(f, value, v),
        Value::Float(v) => write_scalar(f, value, v),
        Value::Double(v) => write_scalar(f, value, v),
        Value::String(v) => write_scalar(f, value, v),
    }
}

fn write_indent(f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
    const TABS: &str = "\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t";

    let mut left = indent;
    while left > 0 {
        let n = left.min(TABS.len());
        f.write_str(&TABS[..n])?;
        left -= n;
    }
    Ok(())
}

fn write_scalar(f: &mut Formatter<'_>, value: &Value, v: &dyn Display) -> fmt::Result {
    writeln!(f, " type=\"{}\" value=\"{}\"/>", value.tag(), v)
}
