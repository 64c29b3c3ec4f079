//! The quiz drip filter.
//!
//! Sits early in the host's "posts resolved for display" pipeline. For each
//! quiz in a result set whose owning lesson is drip-blocked for the current
//! user, the filter swaps the displayable content and excerpt for a locked
//! notice and clears the item's rendering flags so its questions and
//! pagination are not drawn.
//!
//! One filter is built per request cycle. It holds the resolved message
//! template and borrows the host collaborators; it caches nothing else and
//! is dropped when the request ends.

use crate::dates;
use crate::drip::DripType;
use crate::host::{AccessControl, ContentStore, RequestContext, SettingsProvider};
use crate::message::MessageTemplate;
use crate::post::{Post, PostId, PostKind};
use crate::text::{esc_html, trim_words};

/// Word budget for the content preview kept ahead of the notice.
const PREVIEW_WORDS: usize = 20;

/// Transform applied to the rendered notice markup.
pub type NoticeFilter = Box<dyn Fn(&str) -> String>;

/// Per-request filter replacing blocked quiz content with a drip notice.
pub struct QuizDripFilter<'a> {
    template: MessageTemplate,
    content: &'a dyn ContentStore,
    access: &'a dyn AccessControl,
    ctx: RequestContext,
    notice_filters: Vec<NoticeFilter>,
}

impl<'a> QuizDripFilter<'a> {
    /// Build a filter for one request cycle.
    ///
    /// The message template is resolved from settings here, once, and reused
    /// for every quiz the filter touches.
    pub fn new(
        settings: &dyn SettingsProvider,
        content: &'a dyn ContentStore,
        access: &'a dyn AccessControl,
        ctx: RequestContext,
    ) -> Self {
        Self {
            template: MessageTemplate::resolve(settings),
            content,
            access,
            ctx,
            notice_filters: Vec::new(),
        }
    }

    /// Register a transform over the rendered notice markup.
    ///
    /// Filters run in registration order, each seeing the previous output.
    pub fn with_notice_filter(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.notice_filters.push(Box::new(f));
        self
    }

    /// The resolved message template.
    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    /// Filter a resolved result set.
    ///
    /// Short-circuits in admin contexts, on empty input, and when the first
    /// item is not a quiz -- result sets are homogeneous per request, so the
    /// first element stands for the set. Otherwise every quiz whose lesson
    /// is blocked for the current user is replaced by its notice form; all
    /// other items pass through untouched. Output preserves length and
    /// order.
    pub fn filter(&self, posts: Vec<Post>) -> Vec<Post> {
        if self.ctx.is_admin || posts.is_empty() || posts[0].kind != PostKind::Quiz {
            return posts;
        }

        posts
            .into_iter()
            .map(|post| {
                if post.kind != PostKind::Quiz {
                    return post;
                }
                let lesson_id = self.content.lesson_for_quiz(post.id);
                if self.access.is_lesson_access_blocked(lesson_id) {
                    self.inject_drip_notice(post)
                } else {
                    post
                }
            })
            .collect()
    }

    /// Replace a blocked quiz's displayable fields with the drip notice.
    ///
    /// The content becomes a 20-word preview of the original followed by the
    /// notice. The excerpt keeps the original excerpt (ellipsized) when one
    /// existed, else a preview of the rewritten content. Question and
    /// pagination rendering are switched off on the item itself.
    pub fn inject_drip_notice(&self, mut quiz: Post) -> Post {
        let message = self.drip_message(Some(quiz.id));

        let mut notice = format!(r#"<div class="drip-notice info">{}</div>"#, esc_html(&message));
        for f in &self.notice_filters {
            notice = f(&notice);
        }

        quiz.content = format!(
            "<p>{}</p>{}",
            trim_words(&quiz.content, PREVIEW_WORDS),
            notice
        );

        quiz.excerpt = if quiz.excerpt.is_empty() {
            format!(
                "<p>{}</p>{}",
                trim_words(&quiz.content, PREVIEW_WORDS),
                notice
            )
        } else {
            format!("<p>{}&hellip;</p>{}", quiz.excerpt, notice)
        };

        quiz.render.show_questions = false;
        quiz.render.show_pagination = false;

        quiz
    }

    /// Resolve the availability message for a quiz.
    ///
    /// Without an id no specific message can be determined, and drip types
    /// other than absolute/dynamic carry no message; both cases yield the
    /// empty string.
    pub fn drip_message(&self, quiz_id: Option<PostId>) -> String {
        let Some(quiz_id) = quiz_id else {
            return String::new();
        };

        let drip_type = self
            .content
            .drip_meta(quiz_id)
            .map(|meta| meta.drip_type)
            .unwrap_or_default();

        match drip_type {
            DripType::Absolute => self.absolute_message(quiz_id),
            DripType::Dynamic => self.dynamic_message(quiz_id),
            DripType::None => String::new(),
        }
    }

    /// The quiz's drip type, validated against the post store.
    ///
    /// Ids that do not refer to an actual quiz, or quizzes with no drip
    /// metadata, report [`DripType::None`].
    pub fn drip_type(&self, quiz_id: PostId) -> DripType {
        if self.content.post_kind(quiz_id) != Some(PostKind::Quiz) {
            return DripType::None;
        }
        self.content
            .drip_meta(quiz_id)
            .map(|meta| meta.drip_type)
            .unwrap_or_default()
    }

    /// The lesson owning this quiz, if any.
    pub fn lesson_for_quiz(&self, quiz_id: PostId) -> Option<PostId> {
        self.content.lesson_for_quiz(quiz_id)
    }

    /// Message for an absolute drip: the configured calendar date, formatted
    /// with the host display format. Missing or unparseable dates degrade to
    /// an empty message.
    fn absolute_message(&self, quiz_id: PostId) -> String {
        let Some(raw) = self.content.drip_meta(quiz_id).and_then(|m| m.drip_date) else {
            return String::new();
        };
        let Ok(date) = dates::parse_drip_date(&raw) else {
            return String::new();
        };
        let formatted = dates::format_date(&date, &self.ctx.date_format);
        self.template.render_absolute(&formatted)
    }

    /// Message for a dynamic drip: the per-user availability date computed
    /// by access control, formatted in the request locale.
    fn dynamic_message(&self, quiz_id: PostId) -> String {
        let lesson_id = self.content.lesson_for_quiz(quiz_id);
        let Some(date) = self.access.lesson_drip_date(lesson_id, self.ctx.user_id) else {
            return String::new();
        };
        let formatted =
            dates::format_date_localized(&date, &self.ctx.date_format, self.ctx.locale);
        self.template.render_dynamic(&formatted)
    }
}
