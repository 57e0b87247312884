use jff2tcdf_core::{convert, Record, State, Transition, EOF};
use pretty_assertions::assert_eq;

fn lines(records: &[Record]) -> Vec<String> {
    records.iter().map(ToString::to_string).collect()
}

#[test]
fn def_lines_carry_tags_in_fixed_order() {
    let def = |is_final, is_initial| {
        State {
            id: 7,
            is_final,
            is_initial,
        }
        .record()
        .to_string()
    };
    // The trailing space after each tag is part of the format.
    assert_eq!(def(false, false), "def 7 normal");
    assert_eq!(def(true, false), "def 7 final ");
    assert_eq!(def(false, true), "def 7 start ");
    assert_eq!(def(true, true), "def 7 final start ");
}

#[test]
fn trans_and_sentinel_lines() {
    let trans = Record::Trans {
        from: 0,
        to: 1,
        code: EOF,
    };
    assert_eq!(trans.to_string(), "trans 0 1 -1");
    assert_eq!(Record::Eof.to_string(), "eof");
}

#[test]
fn one_trans_record_per_code() {
    let transition = Transition {
        from: 3,
        to: 4,
        read: "a~c".to_owned(),
    };
    let (records, warning) = transition.records();
    assert_eq!(warning, None);
    assert_eq!(
        lines(&records),
        ["trans 3 4 97", "trans 3 4 98", "trans 3 4 99"]
    );
}

#[test]
fn converts_a_document_in_order() {
    let states = [
        State {
            id: 0,
            is_final: false,
            is_initial: true,
        },
        State {
            id: 1,
            is_final: true,
            is_initial: false,
        },
    ];
    let transitions = [Transition {
        from: 0,
        to: 1,
        read: "a~c".to_owned(),
    }];
    let conversion = convert(&states, &transitions);
    assert_eq!(conversion.warnings, vec![]);
    assert_eq!(
        lines(&conversion.records),
        [
            "def 0 start ",
            "def 1 final ",
            "trans 0 1 97",
            "trans 0 1 98",
            "trans 0 1 99",
            "eof",
        ]
    );
}

#[test]
fn bad_labels_warn_but_do_not_interrupt() {
    let states = [];
    let transitions = [
        Transition {
            from: 0,
            to: 1,
            read: "???".to_owned(),
        },
        Transition {
            from: 1,
            to: 2,
            read: "x".to_owned(),
        },
    ];
    let conversion = convert(&states, &transitions);
    assert_eq!(lines(&conversion.records), ["trans 1 2 120", "eof"]);
    assert_eq!(conversion.warnings.len(), 1);
    assert_eq!(conversion.warnings[0].0, "???");
}

#[test]
fn empty_document_is_just_the_sentinel() {
    let conversion = convert(&[], &[]);
    assert_eq!(lines(&conversion.records), ["eof"]);
    assert_eq!(conversion.warnings, vec![]);
}
