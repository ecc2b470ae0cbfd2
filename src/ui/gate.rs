/// Password entry screen shown before the landing page.
///
/// Copy stays Japanese-only like the invitation itself; the language
/// switcher only exists past the gate.

use iced::widget::{button, column, container, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::Message;

pub fn view(input: &str, rejected: bool) -> Element<'_, Message> {
    let mut form: Column<Message> = column![
        text("招待者限定ページ").size(24),
        text("オーナーから案内された合言葉を入力してください。").size(14),
        text_input("合言葉（パスワード）", input)
            .secure(true)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::PasswordSubmitted)
            .padding(10),
        button(text("入室する"))
            .on_press(Message::PasswordSubmitted)
            .padding(10),
    ]
    .spacing(16)
    .max_width(360)
    .align_x(Alignment::Center);

    if rejected {
        form = form.push(text("パスワードが違います。").size(14).style(text::danger));
    }

    form = form.push(text("※ このURLは第三者に公開しないでください。").size(12));

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
