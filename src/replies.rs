//! Reply bank
//!
//! One fixed response per intent. The reply depends only on the intent,
//! never on which phrase triggered it.

use crate::models::Intent;

/// First bot message of every chat session.
pub const WELCOME_MESSAGE: &str = "สวัสดีค่ะ Pizza 1150 ยินดีให้บริการค่ะ 🍕";

/// Label of the quick-reply button that starts an order.
pub const QUICK_REPLY_LABEL: &str = "สั่งเลย!";

pub fn reply_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Greet => {
            "สวัสดีค่ะ 😊 ยินดีต้อนรับสู่ Pizza 1150 ค่ะ ต้องการสั่งพิซซ่าหรือสอบถามโปรโมชั่นไหมคะ?"
        }
        Intent::Promo => {
            "ตอนนี้ Pizza 1150 มีโปร **ซื้อ 1 แถม 1** และคูปองส่วนลดสำหรับเมนูที่ร่วมรายการค่ะ 🎉 หากมีโค้ดส่วนลด ใส่ตอนชำระเงินได้เลยค่ะ"
        }
        Intent::PromoB1g1 => {
            "โปรซื้อ 1 แถม 1 ใช้ได้กับพิซซ่าขนาด/หน้าที่ร่วมรายการ ตรวจสอบได้ในหน้า \"เริ่มสั่งพิซซ่า\" ค่ะ 🎉"
        }
        Intent::PromoTerms => {
            "เงื่อนไขโปรและวันหมดเขตขึ้นกับแคมเปญค่ะ ตรวจสอบรายละเอียดในหน้าโปรโมชันก่อนชำระเงินได้เลยนะคะ 😊"
        }
        Intent::Menu => {
            "เมนูฮิต: ฮาวายเอี้ยน, เปปเปอโรนี, มีทเลิฟเวอร์, ซีฟู้ด + ของทานเล่น (ไก่วิงส์, นักเก็ต, ชีสสติ๊ก) และเครื่องดื่มค่ะ 🍕🥤"
        }
        Intent::Recommend => {
            "แนะนำ “มีทเลิฟเวอร์” สายเนื้อ และ “ซีฟู้ดเดอลุกซ์” สายทะเลค่ะ ถ้าชอบชีส เลือกขอบชีสได้เลย 🧀"
        }
        Intent::Size => {
            "มี 3 ขนาด: เล็ก, กลาง, ใหญ่ เลือกตามจำนวนคนและความอิ่มที่ต้องการได้เลยค่ะ 😋"
        }
        Intent::Crust => {
            "ขอบพิซซ่า: ธรรมดา, ชีส และชีสพิเศษ (เฉพาะบางเมนู) เลือกได้ตอนสั่งซื้อค่ะ 🧀"
        }
        Intent::Vegetarian => {
            "มีตัวเลือกไม่ใส่เนื้อสัตว์/ผักล้วนได้ค่ะ โปรดแจ้งข้อจำกัดอาหารตอนสั่ง เราจะช่วยแนะนำเมนูให้ปลอดภัยนะคะ 🥦"
        }
        Intent::Spicy => {
            "มีเมนูเผ็ดเล็กน้อยถึงปานกลาง เช่น สไปซี่เปปเปอโรนีค่ะ หากไม่ทานเผ็ดแจ้งตอนสั่งได้ค่ะ 🌶️"
        }
        Intent::Allergen => {
            "หากแพ้อาหาร โปรดระบุตอนสั่ง เราจะช่วยแนะนำเมนูที่เหมาะสมให้ค่ะ ความปลอดภัยมาก่อนเสมอ ✅"
        }
        Intent::Halal => {
            "บางสาขามีวัตถุดิบที่ได้รับการรับรองฮาลาลค่ะ แนะนำเช็คสาขาและแจ้งความต้องการตอนสั่งเพื่อความถูกต้อง ☪️"
        }
        Intent::Order => {
            "กดปุ่ม \"สั่งเลย!\" เพื่อเลือกหน้า ขนาด ขอบ และชำระเงินได้เลยค่ะ 📲"
        }
        Intent::MinOrder => {
            "ไม่มีขั้นต่ำสำหรับยอดสั่งซื้อค่ะ แต่มีค่าจัดส่งขึ้นกับพื้นที่บริการนะคะ 🚚"
        }
        Intent::Hours => {
            "Pizza 1150 เปิดทุกวัน **10:00–23:00 น.** (อาจต่างตามสาขาเล็กน้อย) 🕙"
        }
        Intent::DeliveryArea => {
            "มีบริการจัดส่งหลายพื้นที่ค่ะ กรอกที่อยู่ในหน้าสั่งซื้อเพื่อเช็คพื้นที่และค่าส่งได้เลย 🗺️"
        }
        Intent::DeliveryFee => {
            "ค่าส่งขึ้นกับระยะทางและแคมเปญช่วงนั้น ๆ ระบบจะแสดงก่อนยืนยันออเดอร์ค่ะ ✅"
        }
        Intent::DeliveryEta => {
            "โดยทั่วไปจัดส่ง **ประมาณ 30–45 นาที** ขึ้นกับสภาพการจราจรและจำนวนออเดอร์ค่ะ 🚦"
        }
        Intent::TrackOrder => {
            "ติดตามสถานะได้จากลิงก์ในใบสั่งซื้อ หรือหน้า “ประวัติการสั่งซื้อ” ในระบบค่ะ 🔎"
        }
        Intent::CancelOrder => {
            "ต้องการยกเลิก โปรดติดต่อ 1150 โดยเร็วที่สุดพร้อมเลขออเดอร์ ภายในไม่กี่นาทีหลังสั่งจะสะดวกที่สุดค่ะ 📞"
        }
        Intent::ModifyOrder => {
            "หลังยืนยันแล้วอาจแก้ไขได้จำกัดค่ะ โทร 1150 พร้อมเลขออเดอร์เพื่อขอความช่วยเหลือจากเจ้าหน้าที่นะคะ"
        }
        Intent::Payment => {
            "รองรับเงินสดปลายทาง, บัตรเครดิต/เดบิต, โอนผ่านแอป และ e-Wallet (PromptPay, TrueMoney, LINE Pay) ค่ะ 💳💵"
        }
        Intent::Wallet => {
            "จ่ายผ่าน e-Wallet ได้ค่ะ เลือกวิธีชำระในขั้นตอนเช็คเอาต์ ระบบจะพาไปยืนยันการชำระเงินอัตโนมัติ ✅"
        }
        Intent::TaxInvoice => {
            "ขอใบกำกับภาษี/ใบเสร็จได้ในขั้นตอนชำระเงิน โดยกรอกข้อมูลบริษัทและเลขผู้เสียภาษีให้ครบถ้วนค่ะ 🧾"
        }
        Intent::Branch => {
            "เช็คสาขาใกล้คุณได้ในหน้า “ค้นหาสาขา” หรือระบุพิกัดตอนสั่ง ระบบจะแนะนำสาขาที่บริการได้เร็วที่สุดค่ะ 📍"
        }
        Intent::Contact => "ติดต่อ Pizza 1150 ได้ที่ **1150** ในเวลาทำการค่ะ ☎️",
        Intent::Complaint => {
            "ขออภัยในความไม่สะดวกค่ะ 🙏 กรุณาแจ้งเลขออเดอร์และรายละเอียดปัญหา ผ่านแชทนี้หรือโทร 1150 เพื่อให้เราช่วยดูแลค่ะ"
        }
        Intent::Thanks => "ขอบคุณที่ใช้บริการ Pizza 1150 ค่ะ 🍕😊",
        Intent::Unknown => {
            "ขออภัยค่ะ Pizza 1150 ยังไม่เข้าใจคำถามนี้ 🙏 กรุณากดปุ่ม \"สั่งเลย!\" เพื่อทำรายการนะคะ"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_intent_has_a_reply() {
        for intent in Intent::ALL {
            assert!(!reply_for(intent).is_empty(), "{} has no reply", intent);
            assert_eq!(reply_for(intent), reply_for(intent));
        }
    }

    #[test]
    fn test_replies_are_distinct() {
        let replies: HashSet<&str> = Intent::ALL.iter().map(|i| reply_for(*i)).collect();
        assert_eq!(replies.len(), Intent::ALL.len());
    }

    #[test]
    fn test_fallback_points_to_ordering() {
        assert!(reply_for(Intent::Unknown).contains(QUICK_REPLY_LABEL));
        assert!(reply_for(Intent::Order).contains(QUICK_REPLY_LABEL));
    }
}
