use email_reply_extract::*;
use rstest::rstest;

#[rstest]
#[case("Met vriendelijke groeten,")]
#[case("best regards")]
#[case("Best regards,")]
#[case("Kind regards,")]
#[case("groeten,")]
#[case("groeten")]
#[case("Med vennlig hilsen")]
#[case("Cordialement.")]
fn test_is_greeting(#[case] line: &str) {
    assert!(is_greeting(line), "{line}");
}

#[rstest]
#[case("hij zei nog dat je de groeten kreeg")]
#[case("de groeten van Jan")]
#[case("Regards to your mother")]
#[case("You see this this the problem")]
#[case("")]
fn test_is_not_greeting(#[case] line: &str) {
    assert!(!is_greeting(line), "{line}");
}

#[rstest]
#[case("Sent from my iPhone")]
#[case("Sent from Outlook")]
#[case("Verzonden vanaf mijn Samsung Galaxy")]
#[case("Envoyé de mon iPad")]
fn test_is_sent_from(#[case] line: &str) {
    assert!(is_sent_from(line), "{line}");
}

#[rstest]
#[case("Sent you the files yesterday")]
#[case("I sent it from my iPhone")]
#[case("Sentences are hard on an iPhone")]
fn test_is_not_sent_from(#[case] line: &str) {
    assert!(!is_sent_from(line), "{line}");
}
