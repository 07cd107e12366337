use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::oneshot;

// =========================================================================
// MockSurface
// =========================================================================

#[derive(Default)]
struct MockSurface {
    input: RefCell<String>,
    lines: RefCell<Vec<Message>>,
    send_enabled: Cell<bool>,
    focused: Cell<bool>,
    scrolls: Cell<usize>,
}

impl MockSurface {
    fn typed(text: &str) -> Self {
        let surface = Self::default();
        surface.type_text(text);
        surface
    }

    fn type_text(&self, text: &str) {
        *self.input.borrow_mut() = text.to_owned();
        self.focused.set(false);
    }

    fn plain_lines(&self) -> Vec<String> {
        self.lines.borrow().iter().map(Message::to_plain).collect()
    }
}

impl ChatSurface for MockSurface {
    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    fn append(&self, message: &Message) {
        self.lines.borrow_mut().push(message.clone());
    }

    fn scroll_to_bottom(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }

    fn set_send_enabled(&self, enabled: bool) {
        self.send_enabled.set(enabled);
    }

    fn focus_input(&self) {
        self.focused.set(true);
    }
}

// =========================================================================
// Transports
// =========================================================================

#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<String, SendError>>>,
    sent: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Result<String, SendError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), sent: RefCell::default() }
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for ScriptedTransport {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        self.sent.borrow_mut().push(message.to_owned());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SendError::Network("no scripted reply".into())))
    }
}

/// Holds each request open until the test releases it.
struct GatedTransport {
    gate: RefCell<Option<oneshot::Receiver<Result<String, SendError>>>>,
    sent: RefCell<Vec<String>>,
}

impl GatedTransport {
    fn new() -> (Self, oneshot::Sender<Result<String, SendError>>) {
        let (tx, rx) = oneshot::channel();
        (Self { gate: RefCell::new(Some(rx)), sent: RefCell::default() }, tx)
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for GatedTransport {
    async fn send(&self, message: &str) -> Result<String, SendError> {
        self.sent.borrow_mut().push(message.to_owned());
        let rx = self.gate.borrow_mut().take();
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(SendError::Network("gate dropped".into()))),
            None => Err(SendError::Network("gate already used".into())),
        }
    }
}

// =========================================================================
// render_message
// =========================================================================

#[test]
fn new_widget_enables_send_control() {
    let widget = ChatWidget::new(MockSurface::default(), ScriptedTransport::default());
    assert!(widget.surface().send_enabled.get());
    assert!(!widget.is_sending());
}

#[test]
fn render_message_appends_and_scrolls() {
    let widget = ChatWidget::new(MockSurface::default(), ScriptedTransport::default());
    widget.render_message(Sender::System, "ready");
    widget.render_message(Sender::Assistant, "<b>bold</b>");

    let surface = widget.surface();
    assert_eq!(surface.plain_lines(), vec!["System: ready", "Assistant: <b>bold</b>"]);
    assert_eq!(surface.lines.borrow()[1].to_html(), "<b>Assistant:</b> &lt;b&gt;bold&lt;/b&gt;");
    assert_eq!(surface.scrolls.get(), 2);
}

// =========================================================================
// submit — empty input
// =========================================================================

#[tokio::test]
async fn empty_input_renders_nothing_and_sends_nothing() {
    for raw in ["", "   ", "\t\n "] {
        let widget = ChatWidget::new(MockSurface::typed(raw), ScriptedTransport::default());
        assert_eq!(widget.submit().await, SubmitOutcome::Empty);
        assert!(widget.surface().lines.borrow().is_empty());
        assert!(widget.transport.sent.borrow().is_empty());
        assert!(widget.surface().send_enabled.get());
    }
}

#[tokio::test]
async fn byte_order_mark_counts_as_blank() {
    let widget = ChatWidget::new(MockSurface::typed("\u{FEFF} \u{FEFF}"), ScriptedTransport::default());
    assert_eq!(widget.submit().await, SubmitOutcome::Empty);
    assert!(widget.transport.sent.borrow().is_empty());
}

#[tokio::test]
async fn byte_order_mark_is_trimmed_from_sent_text() {
    let transport = ScriptedTransport::new(vec![Ok("Hi".into())]);
    let widget = ChatWidget::new(MockSurface::typed("\u{FEFF}Hello "), transport);
    assert_eq!(widget.submit().await, SubmitOutcome::Replied);
    assert_eq!(*widget.transport.sent.borrow(), vec!["Hello".to_owned()]);
}

// =========================================================================
// submit — success
// =========================================================================

#[tokio::test]
async fn successful_reply_renders_you_then_assistant() {
    let transport = ScriptedTransport::new(vec![Ok("Hi there".into())]);
    let widget = ChatWidget::new(MockSurface::typed("  Hello  "), transport);

    assert_eq!(widget.submit().await, SubmitOutcome::Replied);

    let surface = widget.surface();
    assert_eq!(surface.plain_lines(), vec!["You: Hello", "Assistant: Hi there"]);
    assert_eq!(*widget.transport.sent.borrow(), vec!["Hello".to_owned()]);
    assert!(surface.input.borrow().is_empty());
    assert!(surface.send_enabled.get());
    assert!(surface.focused.get());
    assert!(!widget.is_sending());
}

#[tokio::test]
async fn user_line_is_rendered_before_response_arrives() {
    let (transport, release) = GatedTransport::new();
    let widget = ChatWidget::new(MockSurface::typed("Hello"), transport);

    let (outcome, ()) = tokio::join!(widget.submit(), async {
        let surface = widget.surface();
        assert_eq!(surface.plain_lines(), vec!["You: Hello"]);
        assert!(surface.input.borrow().is_empty());
        assert!(!surface.send_enabled.get());
        assert!(widget.is_sending());
        release.send(Ok("Hi there".into())).unwrap();
    });

    assert_eq!(outcome, SubmitOutcome::Replied);
    assert_eq!(widget.surface().plain_lines(), vec!["You: Hello", "Assistant: Hi there"]);
    assert!(widget.surface().send_enabled.get());
}

// =========================================================================
// submit — failures
// =========================================================================

#[tokio::test]
async fn http_500_renders_system_line_and_reenables() {
    let transport = ScriptedTransport::new(vec![Err(SendError::Status { status: 500 })]);
    let widget = ChatWidget::new(MockSurface::typed("Hello"), transport);

    let outcome = widget.submit().await;
    assert_eq!(outcome, SubmitOutcome::Failed(SendError::Status { status: 500 }));

    let surface = widget.surface();
    assert_eq!(surface.plain_lines(), vec!["You: Hello", "System: Sorry, error: HTTP error! status: 500"]);
    assert!(surface.send_enabled.get());
    assert!(surface.focused.get());
}

#[tokio::test]
async fn network_and_parse_failures_share_one_path() {
    let transport = ScriptedTransport::new(vec![
        Err(SendError::Network("connection refused".into())),
        Err(SendError::Parse("expected value".into())),
    ]);
    let widget = ChatWidget::new(MockSurface::typed("one"), transport);

    assert!(matches!(widget.submit().await, SubmitOutcome::Failed(SendError::Network(_))));
    widget.surface().type_text("two");
    assert!(matches!(widget.submit().await, SubmitOutcome::Failed(SendError::Parse(_))));

    assert_eq!(
        widget.surface().plain_lines(),
        vec![
            "You: one",
            "System: Sorry, error: connection refused",
            "You: two",
            "System: Sorry, error: invalid reply: expected value",
        ]
    );
    assert!(widget.surface().send_enabled.get());
    assert!(widget.surface().focused.get());
}

// =========================================================================
// submit — in-flight guard
// =========================================================================

#[tokio::test]
async fn second_submit_while_sending_is_rejected() {
    let (transport, release) = GatedTransport::new();
    let widget = ChatWidget::new(MockSurface::typed("first"), transport);

    let (first, ()) = tokio::join!(widget.submit(), async {
        widget.surface().type_text("second");
        assert_eq!(widget.submit().await, SubmitOutcome::Busy);
        assert_eq!(widget.surface().input_value(), "second");
        release.send(Ok("ok".into())).unwrap();
    });

    assert_eq!(first, SubmitOutcome::Replied);
    assert_eq!(*widget.transport.sent.borrow(), vec!["first".to_owned()]);
    assert_eq!(widget.surface().plain_lines(), vec!["You: first", "Assistant: ok"]);
}

#[tokio::test]
async fn script_input_is_escaped_in_markup() {
    let transport = ScriptedTransport::new(vec![Ok("done".into())]);
    let widget = ChatWidget::new(MockSurface::typed("<script>x & \"y\"</script>"), transport);
    widget.submit().await;

    let html = widget.surface().lines.borrow()[0].to_html();
    assert_eq!(html, "<b>You:</b> &lt;script&gt;x & \"y\"&lt;/script&gt;");
}
