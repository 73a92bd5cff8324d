//! API console page: tabbed forms exercising every backend operation and
//! showing the raw JSON response.
//!
//! Successful auth responses flow through [`Session::capture`], so logging
//! in from here stores the right token exactly like the login page does.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::navbar::Navbar;
use crate::net::api::{self, ApiResult};
use crate::net::types::{
    AdminLoginRequest, AdminRegisterRequest, ChangePasswordRequest, ContactRequest,
    GovernmentIdType, KycSubmission, LoginRequest, ResetPasswordRequest, SignupRequest,
    UpdateProfileRequest, VerifyOtpRequest, non_empty,
};
use crate::state::session::Session;
use crate::state::ui::ConsoleTab;

/// Shared signals every console tab reads and writes.
#[derive(Clone, Copy)]
struct ConsoleCtx {
    session: RwSignal<Session>,
    response: RwSignal<Option<Value>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
}

impl ConsoleCtx {
    fn begin(self) {
        self.loading.set(true);
    }

    fn session(self) -> Session {
        self.session.get_untracked()
    }

    /// Fold an operation outcome into the shared response panel, capturing
    /// any token a successful auth response carries.
    fn finish(self, result: ApiResult) {
        match result {
            Ok(body) => {
                self.session.update(|s| {
                    s.capture(&body);
                });
                self.response.set(Some(body));
                self.error.set(None);
            }
            Err(e) => {
                self.error.set(Some(e.to_string()));
                self.response.set(None);
            }
        }
        self.loading.set(false);
    }

    fn clear(self) {
        self.response.set(None);
        self.error.set(None);
    }
}

/// API console page.
#[component]
pub fn ConsolePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ctx = ConsoleCtx {
        session,
        response: RwSignal::new(None),
        error: RwSignal::new(None),
        loading: RwSignal::new(false),
    };
    let tab = RwSignal::new(ConsoleTab::Auth);

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <header class="page__header">
                    <div>
                        <h1>"API Console"</h1>
                        <p class="page__subtitle">"Exercise every backend endpoint"</p>
                    </div>
                </header>

                <nav class="filter-tabs">
                    {ConsoleTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="filter-tabs__tab"
                                    class:filter-tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| {
                                        tab.set(t);
                                        ctx.clear();
                                    }
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="console">
                    <div class="console__forms">
                        {move || match tab.get() {
                            ConsoleTab::Auth => view! { <AuthTab ctx=ctx/> }.into_any(),
                            ConsoleTab::User => view! { <UserTab ctx=ctx/> }.into_any(),
                            ConsoleTab::Kyc => view! { <KycTab ctx=ctx/> }.into_any(),
                            ConsoleTab::Health => view! { <HealthTab ctx=ctx/> }.into_any(),
                            ConsoleTab::Admin => view! { <AdminTab ctx=ctx/> }.into_any(),
                        }}
                    </div>

                    <div class="console__response">
                        <div class="console__response-header">
                            <h2>"Response"</h2>
                            <button class="btn" on:click=move |_| ctx.clear()>
                                "Clear"
                            </button>
                        </div>
                        {move || {
                            ctx.loading
                                .get()
                                .then(|| view! { <p class="page__loading">"Calling..."</p> })
                        }}
                        {move || {
                            ctx.error
                                .get()
                                .map(|message| view! { <div class="error-banner">{message}</div> })
                        }}
                        {move || {
                            ctx.response
                                .get()
                                .map(|body| {
                                    let pretty = serde_json::to_string_pretty(&body)
                                        .unwrap_or_default();
                                    view! { <pre class="console__json">{pretty}</pre> }
                                })
                        }}
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Labeled text input bound to a signal.
#[component]
fn Field(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            {label}
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Submit button tied to the shared loading flag.
#[component]
fn RunButton(ctx: ConsoleCtx, label: &'static str) -> impl IntoView {
    view! {
        <button class="btn btn--primary" type="submit" disabled=move || ctx.loading.get()>
            {label}
        </button>
    }
}

#[component]
fn AuthTab(ctx: ConsoleCtx) -> impl IntoView {
    let signup_name = RwSignal::new(String::new());
    let signup_email = RwSignal::new(String::new());
    let signup_phone = RwSignal::new(String::new());
    let signup_password = RwSignal::new(String::new());
    let signup_dob = RwSignal::new(String::new());
    let signup_address = RwSignal::new(String::new());

    let login_email = RwSignal::new(String::new());
    let login_phone = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let otp_email = RwSignal::new(String::new());
    let otp_phone = RwSignal::new(String::new());
    let otp_code = RwSignal::new(String::new());

    let reset_email = RwSignal::new(String::new());
    let reset_phone = RwSignal::new(String::new());
    let reset_otp = RwSignal::new(String::new());
    let reset_password = RwSignal::new(String::new());

    let on_signup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = SignupRequest {
            name: non_empty(&signup_name.get_untracked()),
            email: non_empty(&signup_email.get_untracked()),
            phone: non_empty(&signup_phone.get_untracked()),
            password: signup_password.get_untracked(),
            dob: non_empty(&signup_dob.get_untracked()),
            address: non_empty(&signup_address.get_untracked()),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::signup(&ctx.session(), &req).await);
        });
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = LoginRequest {
            email: non_empty(&login_email.get_untracked()),
            phone: non_empty(&login_phone.get_untracked()),
            password: login_password.get_untracked(),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::login(&ctx.session(), &req).await);
        });
    };

    let on_send_otp = move |_| {
        let req = ContactRequest {
            email: non_empty(&otp_email.get_untracked()),
            phone: non_empty(&otp_phone.get_untracked()),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::send_otp(&ctx.session(), &req).await);
        });
    };

    let on_verify_otp = move |_| {
        let req = VerifyOtpRequest {
            email: non_empty(&otp_email.get_untracked()),
            phone: non_empty(&otp_phone.get_untracked()),
            otp: otp_code.get_untracked(),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::verify_otp(&ctx.session(), &req).await);
        });
    };

    let on_forgot = move |_| {
        let req = ContactRequest {
            email: non_empty(&reset_email.get_untracked()),
            phone: non_empty(&reset_phone.get_untracked()),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::forgot_password(&ctx.session(), &req).await);
        });
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = ResetPasswordRequest {
            email: non_empty(&reset_email.get_untracked()),
            phone: non_empty(&reset_phone.get_untracked()),
            otp: reset_otp.get_untracked(),
            new_password: reset_password.get_untracked(),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::reset_password(&ctx.session(), &req).await);
        });
    };

    let on_me = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::current_user(&ctx.session()).await);
        });
    };

    let on_logout = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::logout(&ctx.session()).await);
        });
    };

    view! {
        <form class="console__form" on:submit=on_signup>
            <h3>"Signup"</h3>
            <Field label="Name" value=signup_name/>
            <Field label="Email" value=signup_email kind="email"/>
            <Field label="Phone" value=signup_phone/>
            <Field label="Password" value=signup_password kind="password"/>
            <Field label="Date of birth" value=signup_dob/>
            <Field label="Address" value=signup_address/>
            <RunButton ctx=ctx label="Signup"/>
        </form>

        <form class="console__form" on:submit=on_login>
            <h3>"Login"</h3>
            <Field label="Email" value=login_email kind="email"/>
            <Field label="Phone" value=login_phone/>
            <Field label="Password" value=login_password kind="password"/>
            <RunButton ctx=ctx label="Login"/>
        </form>

        <div class="console__form">
            <h3>"OTP"</h3>
            <Field label="Email" value=otp_email kind="email"/>
            <Field label="Phone" value=otp_phone/>
            <Field label="OTP" value=otp_code/>
            <div class="console__form-actions">
                <button class="btn" disabled=move || ctx.loading.get() on:click=on_send_otp>
                    "Send OTP"
                </button>
                <button class="btn" disabled=move || ctx.loading.get() on:click=on_verify_otp>
                    "Verify OTP"
                </button>
            </div>
        </div>

        <form class="console__form" on:submit=on_reset>
            <h3>"Password reset"</h3>
            <Field label="Email" value=reset_email kind="email"/>
            <Field label="Phone" value=reset_phone/>
            <Field label="OTP" value=reset_otp/>
            <Field label="New password" value=reset_password kind="password"/>
            <div class="console__form-actions">
                <button
                    class="btn"
                    type="button"
                    disabled=move || ctx.loading.get()
                    on:click=on_forgot
                >
                    "Forgot Password"
                </button>
                <RunButton ctx=ctx label="Reset Password"/>
            </div>
        </form>

        <div class="console__form-actions">
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_me>
                "Current User"
            </button>
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}

#[component]
fn UserTab(ctx: ConsoleCtx) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let on_update_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = UpdateProfileRequest {
            name: non_empty(&name.get_untracked()),
            email: non_empty(&email.get_untracked()),
            phone: non_empty(&phone.get_untracked()),
            dob: non_empty(&dob.get_untracked()),
            address: non_empty(&address.get_untracked()),
            avatar: None,
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::update_profile(&ctx.session(), &req).await);
        });
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = ChangePasswordRequest {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::change_password(&ctx.session(), &req).await);
        });
    };

    let on_get_profile = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::get_profile(&ctx.session()).await);
        });
    };

    let on_list_users = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::list_users(&ctx.session()).await);
        });
    };

    view! {
        <form class="console__form" on:submit=on_update_profile>
            <h3>"Update profile"</h3>
            <Field label="Name" value=name/>
            <Field label="Email" value=email kind="email"/>
            <Field label="Phone" value=phone/>
            <Field label="Date of birth" value=dob/>
            <Field label="Address" value=address/>
            <RunButton ctx=ctx label="Update Profile"/>
        </form>

        <form class="console__form" on:submit=on_change_password>
            <h3>"Change password"</h3>
            <Field label="Current password" value=current_password kind="password"/>
            <Field label="New password" value=new_password kind="password"/>
            <RunButton ctx=ctx label="Change Password"/>
        </form>

        <div class="console__form-actions">
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_get_profile>
                "Get Profile"
            </button>
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_list_users>
                "List Users"
            </button>
        </div>
    }
}

#[component]
fn KycTab(ctx: ConsoleCtx) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let dob = RwSignal::new(String::new());
    let id_type = RwSignal::new(GovernmentIdType::Passport);
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = KycSubmission {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            dob: dob.get_untracked(),
            profile_photo: None,
            government_id_type: id_type.get_untracked(),
            government_id_front: None,
            government_id_back: None,
            address: address.get_untracked(),
            email: non_empty(&email.get_untracked()),
            phone: non_empty(&phone.get_untracked()),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::submit_kyc(&ctx.session(), &req).await);
        });
    };

    let on_status = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::kyc_status(&ctx.session()).await);
        });
    };

    view! {
        <form class="console__form" on:submit=on_submit>
            <h3>"Submit KYC"</h3>
            <Field label="First name" value=first_name/>
            <Field label="Last name" value=last_name/>
            <Field label="Date of birth" value=dob/>
            <label class="field">
                "Government ID type"
                <select on:change=move |ev| {
                    id_type.set(GovernmentIdType::parse(&event_target_value(&ev)));
                }>
                    {GovernmentIdType::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option value=t.as_str() selected=move || id_type.get() == t>
                                    {t.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <Field label="Address" value=address/>
            <Field label="Email" value=email kind="email"/>
            <Field label="Phone" value=phone/>
            <RunButton ctx=ctx label="Submit KYC"/>
        </form>

        <div class="console__form-actions">
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_status>
                "KYC Status"
            </button>
        </div>
    }
}

#[component]
fn HealthTab(ctx: ConsoleCtx) -> impl IntoView {
    let on_health = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::health(&ctx.session()).await);
        });
    };

    let on_wake = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::wake(&ctx.session()).await);
        });
    };

    view! {
        <div class="console__form-actions">
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_health>
                "Health Check"
            </button>
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_wake>
                "Wake"
            </button>
        </div>
    }
}

#[component]
fn AdminTab(ctx: ConsoleCtx) -> impl IntoView {
    let login_email = RwSignal::new(String::new());
    let login_username = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let register_email = RwSignal::new(String::new());
    let register_password = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = AdminLoginRequest {
            email: non_empty(&login_email.get_untracked()),
            username: non_empty(&login_username.get_untracked()),
            password: login_password.get_untracked(),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::admin_login(&ctx.session(), &req).await);
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = AdminRegisterRequest {
            email: register_email.get_untracked(),
            password: register_password.get_untracked(),
        };
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::admin_register(&ctx.session(), &req).await);
        });
    };

    let on_me = move |_| {
        ctx.begin();
        leptos::task::spawn_local(async move {
            ctx.finish(api::admin_me(&ctx.session()).await);
        });
    };

    view! {
        <form class="console__form" on:submit=on_login>
            <h3>"Admin login"</h3>
            <Field label="Email" value=login_email kind="email"/>
            <Field label="Username" value=login_username/>
            <Field label="Password" value=login_password kind="password"/>
            <RunButton ctx=ctx label="Admin Login"/>
        </form>

        <form class="console__form" on:submit=on_register>
            <h3>"Admin register"</h3>
            <Field label="Email" value=register_email kind="email"/>
            <Field label="Password" value=register_password kind="password"/>
            <RunButton ctx=ctx label="Admin Register"/>
        </form>

        <div class="console__form-actions">
            <button class="btn" disabled=move || ctx.loading.get() on:click=on_me>
                "Admin Profile"
            </button>
        </div>
    }
}
