//! Persian translations (fa-IR)

use super::keys::{
    CommonTexts, DetailRowTexts, DetailTexts, HeaderTexts, HintTexts, LightboxTexts, ModalTexts,
    NavTexts, StatusTexts, ToastTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        loading: "در حال بارگذاری...",
    },

    header: HeaderTexts {
        store_name: "آرین استور",
    },

    detail: DetailTexts {
        no_location: "برای باز کردن آدرس کلید o را بزنید، مثلا ?code=ABC123",
        not_found: "اکانتی با این کد یافت نشد:",
        no_image: "تصویری موجود نیست",
        image: "تصویر",
        details_title: "مشخصات اکانت",
        rows: DetailRowTexts {
            tracking_code: "کد آگهی اکانت",
            region: "ریجن اکانت",
            link_type: "لینک اکانت",
            cp_count: "تعداد سیپی",
            battle_pass: "وضعیت بتل پس",
            sell_desc: "توضیحات فروشنده",
            lease: "تضمین با احراز هویت",
            sell_price: "قیمت اکانت به تومان",
            broker: "مدیریت واسطه",
            site_admin: "ادمین معاملات سایت",
        },
        add_to_cart: "افزودن به سبد خرید",
    },

    lightbox: LightboxTexts {
        title: "تصویر بزرگ",
    },

    nav: NavTexts {
        home: "خانه",
        support: "پشتیبانی",
        post_ad: "ثبت اگهی",
        products: "محصولات",
    },

    toast: ToastTexts {
        success_title: "موفق",
        error_title: "خطا",
        added: "محصول با موفقیت به سبد خرید اضافه شد",
        duplicate: "این محصول قبلاً به سبد خرید اضافه شده است",
        failed: "مشکلی در افزودن محصول به سبد خرید رخ داد",
    },

    modal: ModalTexts {
        open_location_title: "باز کردن آدرس",
        open_location_hint: "آدرس یا کوئری را وارد کنید، مثلا ?code=ABC123",
        help_title: "راهنما",
        help_close: "برای بستن Esc را بزنید",
    },

    hints: HintTexts {
        slides: "تصاویر",
        enlarge: "بزرگنمایی",
        add_to_cart: "افزودن به سبد",
        open: "باز کردن آدرس",
        links: "لینک‌ها",
        help: "راهنما",
        close: "بستن",
        quit: "خروج",
    },

    status: StatusTexts {
        navigated: "باز شد:",
        external_link: "باز کردن در مرورگر:",
        adding_to_cart: "در حال افزودن به سبد خرید...",
    },
};
