use crate::cart::ToastMessage;
use crate::i18n::t;
use std::collections::BTreeSet;
use yew::prelude::*;

/// How long a toast stays up before dismissing itself.
pub const AUTO_DISMISS_MS: i32 = 3_000;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastsProps {
    pub toasts: Vec<ToastMessage>,
    pub on_dismiss: Callback<u32>,
}

/// Ids in `toasts` that have no dismissal timer yet, marking them as timed.
/// Ids that have left the queue are forgotten.
pub fn take_unscheduled(toasts: &[ToastMessage], scheduled: &mut BTreeSet<u32>) -> Vec<u32> {
    scheduled.retain(|id| toasts.iter().any(|toast| toast.id == *id));
    toasts
        .iter()
        .map(|toast| toast.id)
        .filter(|id| scheduled.insert(*id))
        .collect()
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    let scheduled = use_mut_ref(BTreeSet::<u32>::new);
    {
        // Effects only run in the browser.
        let ids: Vec<u32> = props.toasts.iter().map(|toast| toast.id).collect();
        let toasts = props.toasts.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(ids, move |_| {
            let fresh = take_unscheduled(&toasts, &mut scheduled.borrow_mut());
            for id in fresh {
                let on_dismiss = on_dismiss.clone();
                crate::dom::run_after(AUTO_DISMISS_MS, move || on_dismiss.emit(id));
            }
            || ()
        });
    }

    html! {
        <div class="toast toast-end toast-top" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let on_click = {
                    let cb = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <div key={toast.id} class={classes!(toast.tone.class(), "toast-item")}>
                        <div>
                            <strong class="toast-title">{ &toast.title }</strong>
                            <p class="toast-description">{ &toast.description }</p>
                        </div>
                        <button class="btn btn-ghost btn-xs" aria-label={t("ui.dismiss")} onclick={on_click}>
                            { "✕" }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ToastTone;

    fn toast(id: u32) -> ToastMessage {
        ToastMessage {
            id,
            title: format!("toast {id}"),
            description: String::new(),
            tone: ToastTone::Info,
        }
    }

    #[test]
    fn every_toast_in_a_batch_gets_a_timer() {
        let mut scheduled = BTreeSet::new();
        assert_eq!(take_unscheduled(&[toast(1), toast(2)], &mut scheduled), [1, 2]);
        assert!(take_unscheduled(&[toast(1), toast(2)], &mut scheduled).is_empty());
    }

    #[test]
    fn dismissed_toasts_are_forgotten() {
        let mut scheduled = BTreeSet::new();
        take_unscheduled(&[toast(1), toast(2)], &mut scheduled);
        assert_eq!(take_unscheduled(&[toast(2), toast(3)], &mut scheduled), [3]);
        assert_eq!(scheduled.into_iter().collect::<Vec<_>>(), [2, 3]);
    }
}
