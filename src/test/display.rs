use crate::{Compound, List, NamedTag, Tag, Value};

#[test]
fn scalar() {
    let tag = NamedTag::int("count", 3).unwrap();
    assert_eq!(tag.to_string(), "<count type=\"Int\" value=\"3\"/>\n");
}

#[test]
fn unnamed_tag() {
    let tag = NamedTag::string("", "hi").unwrap();
    assert_eq!(tag.to_string(), "<TAG type=\"String\" value=\"hi\"/>\n");
}

#[test]
fn tree() {
    let mut pos = Compound::new();
    pos.insert("x", 1.5f64).unwrap();

    let root = NamedTag::compound(
        "root",
        vec![
            NamedTag::short("hp", 100).unwrap(),
            NamedTag::byte_array("data", vec![1u8, 2, 3]).unwrap(),
            NamedTag::list("nums", vec![Value::Int(1), Value::Int(2)]).unwrap(),
            NamedTag::new("pos", pos).unwrap(),
            NamedTag::new("empty", List::new()).unwrap(),
            NamedTag::new("typed", List::of(Tag::Long)).unwrap(),
        ],
    )
    .unwrap();

    let expected = "\
<root type=\"compound tag\">
\t<hp type=\"Short\" value=\"100\"/>
\t<data type=\"byte[3]\"/>
\t<nums type=\"list:Int\">
\t\t<TAG type=\"Int\" value=\"1\"/>
\t\t<TAG type=\"Int\" value=\"2\"/>
\t</nums>
\t<pos type=\"compound tag\">
\t\t<x type=\"Double\" value=\"1.5\"/>
\t</pos>
\t<empty type=\"list\">
\t</empty>
\t<typed type=\"list:Long\">
\t</typed>
</root>
";

    assert_eq!(root.to_string(), expected);
}
